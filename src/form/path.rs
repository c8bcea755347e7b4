/// Nesting level a field lives at inside the contact record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Contact,
    Address,
    Geo,
    Company,
}

impl Section {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Contact => "Basic Information",
            Self::Address => "Address",
            Self::Geo => "Coordinates",
            Self::Company => "Company",
        }
    }
}

/// Address of one leaf in the contact record and its error tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldPath {
    Name,
    Email,
    Phone,
    Website,
    Street,
    Suite,
    City,
    Zipcode,
    Lat,
    Lng,
    CompanyName,
    CatchPhrase,
    Bs,
}

impl FieldPath {
    /// Every field in form order.
    pub const ALL: [FieldPath; 13] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Website,
        Self::Street,
        Self::Suite,
        Self::City,
        Self::Zipcode,
        Self::Lat,
        Self::Lng,
        Self::CompanyName,
        Self::CatchPhrase,
        Self::Bs,
    ];

    pub fn section(&self) -> Section {
        match self {
            Self::Name | Self::Email | Self::Phone | Self::Website => Section::Contact,
            Self::Street | Self::Suite | Self::City | Self::Zipcode => Section::Address,
            Self::Lat | Self::Lng => Section::Geo,
            Self::CompanyName | Self::CatchPhrase | Self::Bs => Section::Company,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Website => "Website",
            Self::Street => "Street",
            Self::Suite => "Suite",
            Self::City => "City",
            Self::Zipcode => "Zipcode",
            Self::Lat => "Latitude",
            Self::Lng => "Longitude",
            Self::CompanyName => "Company name",
            Self::CatchPhrase => "Catch phrase",
            Self::Bs => "BS",
        }
    }

    /// Dotted JSON path, e.g. `address.geo.lat`.
    pub fn json_path(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Website => "website",
            Self::Street => "address.street",
            Self::Suite => "address.suite",
            Self::City => "address.city",
            Self::Zipcode => "address.zipcode",
            Self::Lat => "address.geo.lat",
            Self::Lng => "address.geo.lng",
            Self::CompanyName => "company.name",
            Self::CatchPhrase => "company.catchPhrase",
            Self::Bs => "company.bs",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Self::Suite)
    }

    /// Position in [`FieldPath::ALL`].
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|path| path == self).unwrap_or(0)
    }

    /// Next field in form order, wrapping around.
    pub fn next(&self) -> FieldPath {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous field in form order, wrapping around.
    pub fn prev(&self) -> FieldPath {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_required_fields() {
        let required = FieldPath::ALL.iter().filter(|p| p.is_required()).count();
        assert_eq!(required, 12);
    }

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(FieldPath::Bs.next(), FieldPath::Name);
        assert_eq!(FieldPath::Name.prev(), FieldPath::Bs);
        assert_eq!(FieldPath::Zipcode.next(), FieldPath::Lat);
    }

    #[test]
    fn sections_follow_nesting() {
        assert_eq!(FieldPath::Website.section(), Section::Contact);
        assert_eq!(FieldPath::Suite.section(), Section::Address);
        assert_eq!(FieldPath::Lng.section(), Section::Geo);
        assert_eq!(FieldPath::CatchPhrase.section(), Section::Company);
    }

    #[test]
    fn json_paths_match_the_wire_shape() {
        let wire = serde_json::to_value(crate::form::ContactRecord::default()).unwrap();
        for path in FieldPath::ALL {
            let pointer = format!("/{}", path.json_path().replace('.', "/"));
            assert!(wire.pointer(&pointer).is_some(), "{pointer}");
        }
        assert_eq!(FieldPath::Lat.json_path(), "address.geo.lat");
    }
}
