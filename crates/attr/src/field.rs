//! Single-valued stored-id cell.

use std::fmt;
use std::marker::PhantomData;

use ordinal_registry::{EnumError, Enumerated, FieldInput, Member, MemberId};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The id column of an enumerated attribute on a record.
///
/// Holds the raw stored id (or nothing) and converts through the host
/// type's enumeration on access. Reads go through `find_by_id`, writes
/// through the resolver: members and known name tokens store their id,
/// unknown tokens fail, bare integers and empty inputs clear the cell.
///
/// ```
/// use ordinal_attr::EnumField;
/// use ordinal_registry::define_enum;
///
/// #[derive(Debug, Default)]
/// struct Role;
///
/// define_enum! {
/// 	Role {
/// 		member admin;
/// 		member manager;
/// 	}
/// }
///
/// let mut role = EnumField::<Role>::empty();
/// role.assign("manager")?;
/// assert_eq!(role.get(), Some(Role::manager()));
/// assert_eq!(role.raw(), Some(Role::manager().id()));
/// # Ok::<(), ordinal_registry::EnumError>(())
/// ```
///
/// Serialization is transparent over the raw optional id, so a record
/// embedding this cell serializes its integer column verbatim.
pub struct EnumField<T: Enumerated> {
	raw: Option<MemberId>,
	_marker: PhantomData<fn() -> T>,
}

impl<T: Enumerated> EnumField<T> {
	/// Creates an empty cell.
	pub const fn empty() -> Self {
		Self {
			raw: None,
			_marker: PhantomData,
		}
	}

	/// Wraps a raw stored id as read from the record.
	///
	/// The id is kept verbatim; whether it names a member is decided at
	/// [`get`](Self::get) time, like any other stale stored value.
	pub fn from_raw(raw: Option<i64>) -> Self {
		Self {
			raw: raw.map(MemberId::new),
			_marker: PhantomData,
		}
	}

	/// Returns the raw stored id, if any.
	#[inline]
	pub fn raw(&self) -> Option<MemberId> {
		self.raw
	}

	/// Returns true if no id is stored.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.raw.is_none()
	}

	/// Returns the member the stored id names, if the cell is non-empty
	/// and the enumeration knows the id.
	pub fn get(&self) -> Option<&'static Member<T>> {
		self.raw.and_then(T::find_by_id)
	}

	/// Resolves an input and stores the result.
	///
	/// Inputs that resolve to nothing (empty input, bare integer) clear
	/// the cell; an unknown name token fails and leaves the cell untouched.
	pub fn assign<'a>(&mut self, input: impl Into<FieldInput<'a, T>>) -> Result<(), EnumError> {
		self.raw = T::resolve(input)?;
		Ok(())
	}

	/// Clears the stored id.
	pub fn clear(&mut self) {
		self.raw = None;
	}
}

impl<T: Enumerated> Default for EnumField<T> {
	fn default() -> Self {
		Self::empty()
	}
}

impl<T: Enumerated> Clone for EnumField<T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T: Enumerated> Copy for EnumField<T> {}

impl<T: Enumerated> PartialEq for EnumField<T> {
	fn eq(&self, other: &Self) -> bool {
		self.raw == other.raw
	}
}

impl<T: Enumerated> Eq for EnumField<T> {}

impl<T: Enumerated> fmt::Debug for EnumField<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.get() {
			Some(member) => f.debug_tuple("EnumField").field(member).finish(),
			None => f.debug_tuple("EnumField").field(&self.raw).finish(),
		}
	}
}

impl<T: Enumerated> Serialize for EnumField<T> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.raw.map(MemberId::get).serialize(serializer)
	}
}

impl<'de, T: Enumerated> Deserialize<'de> for EnumField<T> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		Option::<i64>::deserialize(deserializer).map(Self::from_raw)
	}
}
