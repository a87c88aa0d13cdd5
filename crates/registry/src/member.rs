//! The member entity: one immutable (id, name, payload) triple.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::name::MemberName;

/// Integer identity of a member, unique within its enumeration.
///
/// This is the value an external record stores. Ids are small and
/// human-auditable; auto-generated ids count up from the enumeration's
/// configured offset, explicit overrides preserve legacy ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(i64);

impl MemberId {
	/// Wraps a raw stored id.
	pub const fn new(raw: i64) -> Self {
		Self(raw)
	}

	/// Returns the raw integer value.
	#[inline]
	pub const fn get(self) -> i64 {
		self.0
	}
}

impl From<i64> for MemberId {
	fn from(raw: i64) -> Self {
		Self(raw)
	}
}

impl fmt::Display for MemberId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// One member of an enumeration.
///
/// Created exactly once during the definition step, in declaration order,
/// and immutable from then on: the fields are private and no mutating
/// accessor exists. `T` is the host type's payload; when no prebuilt payload
/// is supplied at declaration time, `T::default()` is used.
pub struct Member<T> {
	id: MemberId,
	name: MemberName,
	value: T,
}

impl<T> Member<T> {
	pub(crate) fn new(id: MemberId, name: MemberName, value: T) -> Self {
		Self { id, name, value }
	}

	/// Returns the stored integer identity.
	#[inline]
	pub fn id(&self) -> MemberId {
		self.id
	}

	/// Returns the canonical name token.
	#[inline]
	pub fn name(&self) -> &MemberName {
		&self.name
	}

	/// Returns the payload carried by this member.
	#[inline]
	pub fn value(&self) -> &T {
		&self.value
	}

	/// Returns true if this member's name matches the given token.
	pub fn is_named(&self, token: impl AsRef<str>) -> bool {
		self.name.as_str() == token.as_ref()
	}
}

/// Member equality is identity: same id and same name.
impl<T> PartialEq for Member<T> {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id && self.name == other.name
	}
}

impl<T> Eq for Member<T> {}

impl<T> fmt::Debug for Member<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Member")
			.field("id", &self.id)
			.field("name", &self.name)
			.finish_non_exhaustive()
	}
}

/// A member serializes as its raw stored id.
impl<T> Serialize for Member<T> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.id.serialize(serializer)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_identity_accessors() {
		let member = Member::new(MemberId::new(7), MemberName::new("admin"), ());
		assert_eq!(member.id().get(), 7);
		assert_eq!(member.name(), &"admin");
		assert!(member.is_named("admin"));
		assert!(!member.is_named("manager"));
	}

	#[test]
	fn test_equality_ignores_payload() {
		let a = Member::new(MemberId::new(1), MemberName::new("low"), 10u8);
		let b = Member::new(MemberId::new(1), MemberName::new("low"), 99u8);
		assert_eq!(a, b);

		let other_id = Member::new(MemberId::new(2), MemberName::new("low"), 10u8);
		assert_ne!(a, other_id);
	}

	#[test]
	fn test_serializes_as_raw_id() {
		let member = Member::new(MemberId::new(42), MemberName::new("deluxe"), ());
		assert_eq!(serde_json::to_string(&member).unwrap(), "42");
	}
}
