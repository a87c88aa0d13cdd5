//! The frozen registry: ordered members with lookup by name and id.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::error::EnumError;
use crate::member::{Member, MemberId};
use crate::name::MemberName;

/// The immutable member set of one enumeration.
///
/// Built once by [`EnumBuilder::build`](crate::EnumBuilder::build) during
/// startup, then shared read-only; there is no interior mutability, so
/// concurrent readers need no locking. Every ordered view (`all`, `names`,
/// `ids`, `first`, `last`) observes declaration order.
///
/// Id lookup is a linear scan: enumerations hold at most tens of members,
/// and the id list stays derived from the member table instead of becoming
/// a second index to keep in sync.
pub struct EnumRegistry<T> {
	label: &'static str,
	members: Box<[Member<T>]>,
	by_name: FxHashMap<MemberName, usize>,
}

impl<T> EnumRegistry<T> {
	pub(crate) fn new(
		label: &'static str,
		members: Vec<Member<T>>,
		by_name: FxHashMap<MemberName, usize>,
	) -> Self {
		Self {
			label,
			members: members.into_boxed_slice(),
			by_name,
		}
	}

	/// Returns the host type name this enumeration was defined for.
	#[inline]
	pub fn label(&self) -> &'static str {
		self.label
	}

	/// Returns the number of members.
	#[inline]
	pub fn len(&self) -> usize {
		self.members.len()
	}

	/// Returns true if the enumeration has no members.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.members.is_empty()
	}

	/// Returns every member, in declaration order.
	#[inline]
	pub fn all(&self) -> &[Member<T>] {
		&self.members
	}

	/// Returns an iterator over the members, in declaration order.
	#[inline]
	pub fn iter(&self) -> impl Iterator<Item = &Member<T>> {
		self.members.iter()
	}

	/// Returns the member name tokens, in declaration order.
	pub fn names(&self) -> impl Iterator<Item = &MemberName> {
		self.members.iter().map(Member::name)
	}

	/// Returns the member ids, in declaration order.
	pub fn ids(&self) -> impl Iterator<Item = MemberId> {
		self.members.iter().map(Member::id)
	}

	/// Returns the first declared member, if any.
	pub fn first(&self) -> Option<&Member<T>> {
		self.members.first()
	}

	/// Returns the last declared member, if any.
	pub fn last(&self) -> Option<&Member<T>> {
		self.members.last()
	}

	/// Looks up a member by its normalized name token.
	pub fn get(&self, token: impl AsRef<str>) -> Option<&Member<T>> {
		let slot = *self.by_name.get(token.as_ref())?;
		Some(&self.members[slot])
	}

	/// Returns the member with the given id, if any.
	pub fn find_by_id(&self, id: impl Into<MemberId>) -> Option<&Member<T>> {
		let id = id.into();
		self.members.iter().find(|member| member.id() == id)
	}

	/// Returns the members whose id appears in `ids`, in declaration order.
	///
	/// The argument order is irrelevant and ids without a member are dropped,
	/// so the result can be shorter than the input.
	pub fn find_by_ids(&self, ids: &[MemberId]) -> Vec<&Member<T>> {
		self.members
			.iter()
			.filter(|member| ids.contains(&member.id()))
			.collect()
	}

	/// Like [`find_by_id`](Self::find_by_id), but fails with
	/// [`EnumError::UnknownId`] when no member matches.
	pub fn find(&self, id: impl Into<MemberId>) -> Result<&Member<T>, EnumError> {
		let id = id.into();
		self.find_by_id(id).ok_or(EnumError::UnknownId {
			enumeration: self.label,
			id,
		})
	}

	/// Returns true iff a member carries the given id.
	pub fn is_valid_id(&self, id: impl Into<MemberId>) -> bool {
		let id = id.into();
		self.ids().any(|candidate| candidate == id)
	}

	/// Returns true iff a member carries the given name token.
	pub fn is_valid_name(&self, token: impl AsRef<str>) -> bool {
		self.by_name.contains_key(token.as_ref())
	}
}

impl<T> fmt::Debug for EnumRegistry<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("EnumRegistry")
			.field("label", &self.label)
			.field("members", &self.members)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::builder::{EnumBuilder, MemberOptions};

	fn seasons() -> EnumRegistry<()> {
		let mut builder = EnumBuilder::new("Season");
		builder.member("low").unwrap();
		builder.member_with("mid", MemberOptions::new().id(10)).unwrap();
		builder.member("high").unwrap();
		builder.build()
	}

	#[test]
	fn test_ordered_views_follow_declaration_order() {
		let seasons = seasons();

		let names: Vec<&str> = seasons.names().map(MemberName::as_str).collect();
		assert_eq!(names, ["low", "mid", "high"]);

		let ids: Vec<i64> = seasons.ids().map(MemberId::get).collect();
		assert_eq!(ids, [1, 10, 3]);

		assert_eq!(seasons.first().unwrap().name(), &"low");
		assert_eq!(seasons.last().unwrap().name(), &"high");
		assert_eq!(seasons.len(), 3);
	}

	#[test]
	fn test_empty_registry() {
		let empty = EnumBuilder::<()>::new("Nothing").build();
		assert!(empty.is_empty());
		assert!(empty.first().is_none());
		assert!(empty.last().is_none());
		assert_eq!(empty.names().count(), 0);
	}

	#[test]
	fn test_get_by_name_token() {
		let seasons = seasons();
		assert_eq!(seasons.get("mid").unwrap().id().get(), 10);
		assert_eq!(seasons.get(String::from("high")).unwrap().id().get(), 3);
		assert!(seasons.get("shoulder").is_none());
	}

	#[test]
	fn test_find_agrees_with_find_by_id() {
		let seasons = seasons();

		for member in seasons.all() {
			let found = seasons.find(member.id()).unwrap();
			assert_eq!(found, seasons.find_by_id(member.id()).unwrap());
		}

		assert!(seasons.find_by_id(999).is_none());
		assert_eq!(
			seasons.find(999).unwrap_err(),
			EnumError::UnknownId {
				enumeration: "Season",
				id: MemberId::new(999),
			}
		);
	}

	#[test]
	fn test_find_by_ids_is_declaration_ordered() {
		let seasons = seasons();

		let forward = seasons.find_by_ids(&[MemberId::new(3), MemberId::new(1)]);
		let reversed = seasons.find_by_ids(&[MemberId::new(1), MemberId::new(3)]);
		assert_eq!(forward, reversed);

		let names: Vec<&str> = forward.iter().map(|m| m.name().as_str()).collect();
		assert_eq!(names, ["low", "high"]);
	}

	#[test]
	fn test_find_by_ids_drops_unmatched() {
		let seasons = seasons();
		let found = seasons.find_by_ids(&[MemberId::new(10), MemberId::new(777)]);
		assert_eq!(found.len(), 1);
		assert_eq!(found[0].name(), &"mid");
	}

	#[test]
	fn test_valid_id_rejects_absent_and_below_offset() {
		let mut builder = EnumBuilder::<()>::new("Priority").start_from(100);
		builder.member("low").unwrap();
		builder.member("high").unwrap();
		let priorities = builder.build();

		assert!(priorities.is_valid_id(101));
		assert!(priorities.is_valid_id(102));
		assert!(!priorities.is_valid_id(1));
		assert!(!priorities.is_valid_id(100));
		assert!(!priorities.is_valid_id(103));
	}

	#[test]
	fn test_valid_name_normalizes_its_input() {
		let seasons = seasons();
		assert!(seasons.is_valid_name("low"));
		assert!(seasons.is_valid_name(String::from("mid")));
		assert!(!seasons.is_valid_name("LOW"));
		assert!(!seasons.is_valid_name("monsoon"));
	}
}
