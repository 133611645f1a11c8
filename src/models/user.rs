use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Server-assigned user identifier. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct UserId(u64);

impl UserId {
    /// Wrap a raw id, rejecting zero.
    pub fn new(raw: u64) -> Option<Self> {
        (raw > 0).then_some(Self(raw))
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// The following id, used to step through profiles in place.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// The preceding id, or `None` at the first user.
    pub fn prev(self) -> Option<Self> {
        self.0.checked_sub(1).and_then(Self::new)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u64> for UserId {
    type Error = InvalidUserId;

    fn try_from(raw: u64) -> Result<Self, Self::Error> {
        Self::new(raw).ok_or_else(|| InvalidUserId(raw.to_string()))
    }
}

impl From<UserId> for u64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

/// An id that is not a positive integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a valid user id")]
pub struct InvalidUserId(pub String);

impl FromStr for UserId {
    type Err = InvalidUserId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .ok()
            .and_then(UserId::new)
            .ok_or_else(|| InvalidUserId(s.to_string()))
    }
}

/// Latitude/longitude pair, kept as the strings the service sends.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

impl Address {
    /// "street, suite, city - zipcode"
    pub fn single_line(&self) -> String {
        format!(
            "{}, {}, {} - {}",
            self.street, self.suite, self.city, self.zipcode
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

/// A person in the directory, as returned by `GET /users` and `GET /users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub address: Address,
    pub company: Company,
}

impl UserRecord {
    /// Up to two initials taken from the words of the display name.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_rejects_zero_and_garbage() {
        assert_eq!("7".parse::<UserId>(), Ok(UserId(7)));
        assert_eq!(" 12 ".parse::<UserId>(), Ok(UserId(12)));
        assert!("0".parse::<UserId>().is_err());
        assert!("-3".parse::<UserId>().is_err());
        assert!("abc".parse::<UserId>().is_err());
        assert!("".parse::<UserId>().is_err());
    }

    #[test]
    fn test_user_id_stepping() {
        let id = UserId::new(1).unwrap();
        assert_eq!(id.next().get(), 2);
        assert_eq!(id.prev(), None);
        assert_eq!(id.next().prev(), Some(id));
    }

    #[test]
    fn test_user_id_json_is_a_positive_number() {
        assert_eq!(serde_json::from_str::<UserId>("7").unwrap(), UserId(7));
        assert_eq!(serde_json::to_string(&UserId(7)).unwrap(), "7");
        assert!(serde_json::from_str::<UserId>("0").is_err());

        let zero = serde_json::json!({
            "id": 0, "name": "Nobody", "username": "", "email": "",
            "phone": "", "website": "",
            "address": {"street": "", "suite": "", "city": "", "zipcode": "",
                        "geo": {"lat": "", "lng": ""}},
            "company": {"name": "", "catchPhrase": "", "bs": ""}
        });
        assert!(serde_json::from_value::<UserRecord>(zero).is_err());
    }

    #[test]
    fn test_deserialize_service_shape() {
        let json = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874",
                "geo": { "lat": "-37.3159", "lng": "81.1496" }
            },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": {
                "name": "Romaguera-Crona",
                "catchPhrase": "Multi-layered client-server neural-net",
                "bs": "harness real-time e-markets"
            }
        }"#;

        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(user.id.get(), 1);
        assert_eq!(user.username, "Bret");
        assert_eq!(user.address.geo.lat, "-37.3159");
        assert_eq!(
            user.company.catch_phrase,
            "Multi-layered client-server neural-net"
        );
        assert_eq!(user.initials(), "LG");
        assert_eq!(
            user.address.single_line(),
            "Kulas Light, Apt. 556, Gwenborough - 92998-3874"
        );
    }

    #[test]
    fn test_empty_object_does_not_decode() {
        assert!(serde_json::from_str::<UserRecord>("{}").is_err());
    }

    #[test]
    fn test_initials_edge_cases() {
        let mut user: UserRecord = serde_json::from_value(serde_json::json!({
            "id": 3, "name": "Clementine Bauch Jr", "username": "", "email": "",
            "phone": "", "website": "",
            "address": {"street": "", "suite": "", "city": "", "zipcode": "",
                        "geo": {"lat": "", "lng": ""}},
            "company": {"name": "", "catchPhrase": "", "bs": ""}
        }))
        .unwrap();
        assert_eq!(user.initials(), "CB");

        user.name = "Ann".to_string();
        assert_eq!(user.initials(), "A");

        user.name = "   ".to_string();
        assert_eq!(user.initials(), "");
    }
}
