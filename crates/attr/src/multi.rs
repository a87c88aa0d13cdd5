//! Multi-valued stored-id cell.

use std::fmt;
use std::marker::PhantomData;

use ordinal_registry::{EnumError, Enumerated, FieldInput, Member, MemberId};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The id-list column of a multi-valued enumerated attribute.
///
/// The stored ids are kept verbatim in storage order; member access goes
/// through `find_by_ids`, so [`members`](Self::members) follows declaration
/// order and drops stored ids the enumeration does not know.
pub struct EnumSetField<T: Enumerated> {
	raw: Vec<MemberId>,
	_marker: PhantomData<fn() -> T>,
}

impl<T: Enumerated> EnumSetField<T> {
	/// Creates an empty cell.
	pub const fn empty() -> Self {
		Self {
			raw: Vec::new(),
			_marker: PhantomData,
		}
	}

	/// Wraps raw stored ids as read from the record.
	pub fn from_raw(raw: impl IntoIterator<Item = i64>) -> Self {
		Self {
			raw: raw.into_iter().map(MemberId::new).collect(),
			_marker: PhantomData,
		}
	}

	/// Returns the raw stored ids, in storage order.
	#[inline]
	pub fn raw(&self) -> &[MemberId] {
		&self.raw
	}

	/// Returns the number of stored ids.
	#[inline]
	pub fn len(&self) -> usize {
		self.raw.len()
	}

	/// Returns true if no id is stored.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.raw.is_empty()
	}

	/// Returns the members the stored ids name, in declaration order.
	///
	/// Unknown stored ids are dropped, so the result can be shorter than
	/// [`raw`](Self::raw).
	pub fn members(&self) -> Vec<&'static Member<T>> {
		T::find_by_ids(&self.raw)
	}

	/// Resolves every input and replaces the stored ids with the results.
	///
	/// Resolution is all-or-nothing: on an unknown name token nothing is
	/// stored and the cell keeps its previous ids. Inputs that resolve to
	/// nothing (empty input, bare integer) contribute no id.
	pub fn assign_all<'a, I>(&mut self, inputs: I) -> Result<(), EnumError>
	where
		I: IntoIterator,
		I::Item: Into<FieldInput<'a, T>>,
	{
		let mut next = Vec::new();
		for input in inputs {
			if let Some(id) = T::resolve(input)? {
				next.push(id);
			}
		}
		self.raw = next;
		Ok(())
	}

	/// Clears the stored ids.
	pub fn clear(&mut self) {
		self.raw.clear();
	}
}

impl<T: Enumerated> Default for EnumSetField<T> {
	fn default() -> Self {
		Self::empty()
	}
}

impl<T: Enumerated> Clone for EnumSetField<T> {
	fn clone(&self) -> Self {
		Self {
			raw: self.raw.clone(),
			_marker: PhantomData,
		}
	}
}

impl<T: Enumerated> PartialEq for EnumSetField<T> {
	fn eq(&self, other: &Self) -> bool {
		self.raw == other.raw
	}
}

impl<T: Enumerated> Eq for EnumSetField<T> {}

impl<T: Enumerated> fmt::Debug for EnumSetField<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("EnumSetField").field(&self.raw).finish()
	}
}

impl<T: Enumerated> Serialize for EnumSetField<T> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_seq(self.raw.iter().map(|id| id.get()))
	}
}

impl<'de, T: Enumerated> Deserialize<'de> for EnumSetField<T> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		Vec::<i64>::deserialize(deserializer).map(Self::from_raw)
	}
}
