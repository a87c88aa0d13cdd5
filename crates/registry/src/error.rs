use thiserror::Error;

use crate::member::MemberId;
use crate::name::MemberName;

/// Errors raised while defining or querying an enumeration.
///
/// The repeated-* variants are definition-time failures and abort the
/// enumeration being built. The unknown-* variants are the recoverable
/// not-found conditions raised by [`find`](crate::EnumRegistry::find) and by
/// resolving an unrecognized name token; callers that only want a membership
/// check should prefer the boolean predicates over matching on these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnumError {
	/// A declared id collides with an existing member's id.
	#[error("enumeration {enumeration}: member `{name}` repeats id {id}")]
	RepeatedId {
		enumeration: &'static str,
		name: MemberName,
		id: MemberId,
	},
	/// A declared name collides with an existing member's name.
	#[error("enumeration {enumeration}: member name `{name}` is already declared")]
	RepeatedName {
		enumeration: &'static str,
		name: MemberName,
	},
	/// No member carries the requested id.
	#[error("enumeration {enumeration}: no member with id {id}")]
	UnknownId {
		enumeration: &'static str,
		id: MemberId,
	},
	/// No member carries the requested name token.
	#[error("enumeration {enumeration}: no member named `{name}`")]
	UnknownName {
		enumeration: &'static str,
		name: MemberName,
	},
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_messages_carry_the_offender() {
		let err = EnumError::RepeatedId {
			enumeration: "Role",
			name: MemberName::new("manager"),
			id: MemberId::new(1),
		};
		assert_eq!(
			err.to_string(),
			"enumeration Role: member `manager` repeats id 1"
		);

		let err = EnumError::UnknownName {
			enumeration: "Role",
			name: MemberName::new("intern"),
		};
		assert_eq!(err.to_string(), "enumeration Role: no member named `intern`");
	}
}
