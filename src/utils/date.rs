pub const DATE_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub mod serializer {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        time.format(DATE_FMT).to_string().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        let time = NaiveDateTime::parse_from_str(&str_time, DATE_FMT).map_err(D::Error::custom)?;
        Ok(time)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde::{Deserialize, Serialize};
    use crate::utils::date::serializer;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Stamp {
        #[serde(with = "serializer")]
        at: chrono::NaiveDateTime,
    }

    #[tokio::test]
    async fn test_should_serialize_and_parse_timestamp() {
        let at = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap().and_hms_opt(17, 0, 0).unwrap();
        let json = serde_json::to_string(&Stamp { at }).expect("should serialize");
        let parsed: Stamp = serde_json::from_str(&json).expect("should parse");
        assert_eq!(at, parsed.at);
    }
}
