//! Error tree mirroring [`ContactRecord`](crate::form::ContactRecord).
//!
//! Every leaf is an optional message. Reads, writes and clears all go
//! through [`ErrorTree::slot_mut`], so sibling errors are never dropped by a
//! partial update.

use crate::form::path::FieldPath;

/// A node of the error tree that can report whether anything beneath it failed.
pub trait ErrorBranch {
    fn is_clear(&self) -> bool;
}

impl ErrorBranch for Option<String> {
    fn is_clear(&self) -> bool {
        self.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeoErrors {
    pub lat: Option<String>,
    pub lng: Option<String>,
}

impl ErrorBranch for GeoErrors {
    fn is_clear(&self) -> bool {
        self.lat.is_clear() && self.lng.is_clear()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressErrors {
    pub street: Option<String>,
    pub suite: Option<String>,
    pub city: Option<String>,
    pub zipcode: Option<String>,
    pub geo: GeoErrors,
}

impl ErrorBranch for AddressErrors {
    fn is_clear(&self) -> bool {
        self.street.is_clear()
            && self.suite.is_clear()
            && self.city.is_clear()
            && self.zipcode.is_clear()
            && self.geo.is_clear()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompanyErrors {
    pub name: Option<String>,
    pub catch_phrase: Option<String>,
    pub bs: Option<String>,
}

impl ErrorBranch for CompanyErrors {
    fn is_clear(&self) -> bool {
        self.name.is_clear() && self.catch_phrase.is_clear() && self.bs.is_clear()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorTree {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub address: AddressErrors,
    pub company: CompanyErrors,
}

impl ErrorBranch for ErrorTree {
    fn is_clear(&self) -> bool {
        self.name.is_clear()
            && self.email.is_clear()
            && self.phone.is_clear()
            && self.website.is_clear()
            && self.address.is_clear()
            && self.company.is_clear()
    }
}

impl ErrorTree {
    pub fn slot_mut(&mut self, path: FieldPath) -> &mut Option<String> {
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

    pub fn get(&self, path: FieldPath) -> Option<&str> {
        let slot = match path {
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
        };
        slot.as_deref()
    }

    pub fn set(&mut self, path: FieldPath, message: impl Into<String>) {
        *self.slot_mut(path) = Some(message.into());
    }

    /// Clear one leaf. Returns whether an error was present.
    pub fn clear(&mut self, path: FieldPath) -> bool {
        self.slot_mut(path).take().is_some()
    }

    /// Overlay every present leaf of `other` onto `self`.
    pub fn merge(&mut self, other: ErrorTree) {
        let mut other = other;
        for path in FieldPath::ALL {
            if let Some(message) = other.slot_mut(path).take() {
                self.set(path, message);
            }
        }
    }

    /// No present leaf at any depth.
    pub fn is_valid(&self) -> bool {
        self.is_clear()
    }

    /// Paths that currently carry an error, in form order.
    pub fn failed_paths(&self) -> Vec<FieldPath> {
        FieldPath::ALL
            .into_iter()
            .filter(|path| self.get(*path).is_some())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree_is_valid() {
        assert!(ErrorTree::default().is_valid());
        assert!(AddressErrors::default().is_clear());
    }

    #[test]
    fn nested_leaf_makes_tree_invalid() {
        let mut tree = ErrorTree::default();
        tree.set(FieldPath::Lng, "Longitude is required");
        assert!(!tree.address.geo.is_clear());
        assert!(!tree.address.is_clear());
        assert!(tree.company.is_clear());
        assert!(!tree.is_valid());
    }

    #[test]
    fn clear_reports_presence() {
        let mut tree = ErrorTree::default();
        tree.set(FieldPath::Bs, "BS is required");
        assert!(tree.clear(FieldPath::Bs));
        assert!(!tree.clear(FieldPath::Bs));
        assert!(tree.is_valid());
    }

    #[test]
    fn merge_keeps_siblings() {
        let mut tree = ErrorTree::default();
        tree.set(FieldPath::Lat, "Latitude is required");
        let mut other = ErrorTree::default();
        other.set(FieldPath::Lng, "Longitude is required");
        tree.merge(other);
        assert_eq!(tree.failed_paths(), vec![FieldPath::Lat, FieldPath::Lng]);
    }
}
