//! Canonical member name tokens.

use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

/// Canonical token form of a member name.
///
/// Every name-like input is stringified and re-interned into this one
/// comparable form before it is stored or compared, so lookups by string
/// slice, owned string, or another `MemberName` all agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MemberName(Box<str>);

impl MemberName {
	/// Interns a name-like token into its canonical form.
	pub fn new(token: impl AsRef<str>) -> Self {
		Self(Box::from(token.as_ref()))
	}

	/// Returns the canonical token text.
	#[inline]
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl From<&str> for MemberName {
	fn from(token: &str) -> Self {
		Self::new(token)
	}
}

impl From<String> for MemberName {
	fn from(token: String) -> Self {
		Self(token.into_boxed_str())
	}
}

impl From<&MemberName> for MemberName {
	fn from(name: &MemberName) -> Self {
		name.clone()
	}
}

impl Borrow<str> for MemberName {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl AsRef<str> for MemberName {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl PartialEq<str> for MemberName {
	fn eq(&self, other: &str) -> bool {
		self.as_str() == other
	}
}

impl PartialEq<&str> for MemberName {
	fn eq(&self, other: &&str) -> bool {
		self.as_str() == *other
	}
}

impl fmt::Display for MemberName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_inputs_intern_to_one_form() {
		let from_slice = MemberName::from("admin");
		let from_owned = MemberName::from(String::from("admin"));
		let from_name = MemberName::from(&from_slice);

		assert_eq!(from_slice, from_owned);
		assert_eq!(from_slice, from_name);
		assert_eq!(from_slice, "admin");
	}

	#[test]
	fn test_token_text_is_preserved() {
		let name = MemberName::new("Half_Board");
		assert_eq!(name.as_str(), "Half_Board");
		assert_ne!(name, "half_board");
	}

	#[test]
	fn test_display_is_the_token() {
		assert_eq!(MemberName::new("manager").to_string(), "manager");
	}
}
