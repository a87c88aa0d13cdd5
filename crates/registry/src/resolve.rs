//! Value resolution at the persistence boundary.

use std::fmt;

use crate::error::EnumError;
use crate::member::{Member, MemberId};
use crate::name::MemberName;
use crate::registry::EnumRegistry;

/// An arbitrary input arriving at the persistence boundary.
///
/// Persistence adapters receive "something" to store into an id column: a
/// member, a name token, a bare integer, or nothing. This enum classifies
/// the input for [`resolve`]; `From` conversions let call sites pass the
/// natural representation directly.
pub enum FieldInput<'a, T> {
	/// A member of the enumeration; resolves to its id.
	Member(&'a Member<T>),
	/// A name token; resolves through the registry.
	Name(&'a str),
	/// A bare integer. Deliberately not coerced to an id: resolves to
	/// nothing, exactly like an unrecognized input type.
	Id(i64),
	/// Nothing; resolves to nothing and clears the stored id.
	None,
}

impl<'a, T> From<&'a Member<T>> for FieldInput<'a, T> {
	fn from(member: &'a Member<T>) -> Self {
		Self::Member(member)
	}
}

impl<'a, T> From<&'a str> for FieldInput<'a, T> {
	fn from(token: &'a str) -> Self {
		Self::Name(token)
	}
}

impl<T> From<i64> for FieldInput<'_, T> {
	fn from(raw: i64) -> Self {
		Self::Id(raw)
	}
}

impl<T> Clone for FieldInput<'_, T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T> Copy for FieldInput<'_, T> {}

impl<T> fmt::Debug for FieldInput<'_, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Member(member) => f.debug_tuple("Member").field(member).finish(),
			Self::Name(token) => f.debug_tuple("Name").field(token).finish(),
			Self::Id(raw) => f.debug_tuple("Id").field(raw).finish(),
			Self::None => f.write_str("None"),
		}
	}
}

/// Resolves an arbitrary input into the id to store, if any.
///
/// - A member resolves to its id directly.
/// - A name token resolves to the id of the member carrying that name, or
///   fails with [`EnumError::UnknownName`] carrying the offending token.
/// - A bare integer and an empty input resolve to `Ok(None)`: the caller
///   clears its stored id. This is the designed clear path, not a failure,
///   and the integer case is a deliberate asymmetry — raw ids never pass
///   through unchecked.
pub fn resolve<T>(
	input: FieldInput<'_, T>,
	registry: &EnumRegistry<T>,
) -> Result<Option<MemberId>, EnumError> {
	match input {
		FieldInput::Member(member) => Ok(Some(member.id())),
		FieldInput::Name(token) => match registry.get(token) {
			Some(member) => Ok(Some(member.id())),
			None => Err(EnumError::UnknownName {
				enumeration: registry.label(),
				name: MemberName::new(token),
			}),
		},
		FieldInput::Id(_) | FieldInput::None => Ok(None),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::builder::EnumBuilder;

	fn roles() -> EnumRegistry<()> {
		let mut builder = EnumBuilder::new("Role");
		builder.member("admin").unwrap();
		builder.member("manager").unwrap();
		builder.build()
	}

	#[test]
	fn test_member_resolves_to_its_id() {
		let roles = roles();
		let admin = roles.get("admin").unwrap();
		assert_eq!(resolve(admin.into(), &roles), Ok(Some(MemberId::new(1))));
	}

	#[test]
	fn test_name_token_resolves_through_the_registry() {
		let roles = roles();
		assert_eq!(resolve("manager".into(), &roles), Ok(Some(MemberId::new(2))));
	}

	#[test]
	fn test_unknown_name_fails_with_the_offending_token() {
		let roles = roles();
		assert_eq!(
			resolve("intern".into(), &roles),
			Err(EnumError::UnknownName {
				enumeration: "Role",
				name: MemberName::new("intern"),
			})
		);
	}

	#[test]
	fn test_bare_integer_resolves_to_nothing() {
		let roles = roles();
		// 1 is a valid member id, but integers are not coerced.
		assert_eq!(resolve(1i64.into(), &roles), Ok(None));
		assert_eq!(resolve(42i64.into(), &roles), Ok(None));
	}

	#[test]
	fn test_empty_input_clears() {
		let roles = roles();
		assert_eq!(resolve(FieldInput::None, &roles), Ok(None));
	}
}
