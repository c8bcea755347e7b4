use serde::{Deserialize, Serialize};

use crate::form::path::FieldPath;

/// Geographic coordinates kept as numeric strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    #[serde(default)]
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

/// The nested record collected by the create-user form and posted to `/users`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub address: Address,
    pub company: Company,
}

impl ContactRecord {
    pub fn field(&self, path: FieldPath) -> &str {
        match path {
            FieldPath::Name => &self.name,
            FieldPath::Email => &self.email,
            FieldPath::Phone => &self.phone,
            FieldPath::Website => &self.website,
            FieldPath::Street => &self.address.street,
            FieldPath::Suite => &self.address.suite,
            FieldPath::City => &self.address.city,
            FieldPath::Zipcode => &self.address.zipcode,
            FieldPath::Lat => &self.address.geo.lat,
            FieldPath::Lng => &self.address.geo.lng,
            FieldPath::CompanyName => &self.company.name,
            FieldPath::CatchPhrase => &self.company.catch_phrase,
            FieldPath::Bs => &self.company.bs,
        }
    }

    pub fn field_mut(&mut self, path: FieldPath) -> &mut String {
        match path {
            FieldPath::Name => &mut self.name,
            FieldPath::Email => &mut self.email,
            FieldPath::Phone => &mut self.phone,
            FieldPath::Website => &mut self.website,
            FieldPath::Street => &mut self.address.street,
            FieldPath::Suite => &mut self.address.suite,
            FieldPath::City => &mut self.address.city,
            FieldPath::Zipcode => &mut self.address.zipcode,
            FieldPath::Lat => &mut self.address.geo.lat,
            FieldPath::Lng => &mut self.address.geo.lng,
            FieldPath::CompanyName => &mut self.company.name,
            FieldPath::CatchPhrase => &mut self.company.catch_phrase,
            FieldPath::Bs => &mut self.company.bs,
        }
    }

    pub fn set(&mut self, path: FieldPath, value: impl Into<String>) {
        *self.field_mut(path) = value.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_reaches_nested_fields() {
        let mut record = ContactRecord::default();
        record.set(FieldPath::Lat, "-37.3159");
        record.set(FieldPath::CatchPhrase, "Multi-layered client-server neural-net");
        assert_eq!(record.address.geo.lat, "-37.3159");
        assert_eq!(record.company.catch_phrase, "Multi-layered client-server neural-net");
    }

    #[test]
    fn serializes_catch_phrase_in_camel_case() {
        let mut record = ContactRecord::default();
        record.set(FieldPath::CatchPhrase, "harness");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["company"]["catchPhrase"], "harness");
        assert_eq!(json["address"]["geo"]["lat"], "");
    }
}
