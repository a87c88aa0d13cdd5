//! Definition-time accumulation of an enumeration's members.

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::error::EnumError;
use crate::member::{Member, MemberId};
use crate::name::MemberName;
use crate::registry::EnumRegistry;

/// Per-member declaration options.
///
/// The explicit id override preserves legacy ids across migrations; the
/// prebuilt value replaces the `T::default()` payload.
#[derive(Debug)]
pub struct MemberOptions<T> {
	id: Option<MemberId>,
	value: Option<T>,
}

impl<T> MemberOptions<T> {
	/// Creates empty options: auto-generated id, default payload.
	pub fn new() -> Self {
		Self {
			id: None,
			value: None,
		}
	}

	/// Overrides the auto-generated id for this member.
	pub fn id(mut self, id: impl Into<MemberId>) -> Self {
		self.id = Some(id.into());
		self
	}

	/// Supplies a prebuilt payload instead of `T::default()`.
	pub fn value(mut self, value: T) -> Self {
		self.value = Some(value);
		self
	}
}

impl<T> Default for MemberOptions<T> {
	fn default() -> Self {
		Self::new()
	}
}

/// Accumulates the members of one enumeration, then freezes them.
///
/// Declaration failures surface eagerly from [`member`](Self::member), so an
/// inconsistent set can never reach a queryable registry; only the consuming
/// [`build`](Self::build) produces an [`EnumRegistry`].
///
/// ```
/// use ordinal_registry::{EnumBuilder, MemberOptions};
///
/// let mut builder = EnumBuilder::<()>::new("Season");
/// builder.member("low")?;
/// builder.member_with("high", MemberOptions::new().id(10))?;
/// let seasons = builder.build();
///
/// assert_eq!(seasons.ids().map(|id| id.get()).collect::<Vec<_>>(), [1, 10]);
/// # Ok::<(), ordinal_registry::EnumError>(())
/// ```
pub struct EnumBuilder<T> {
	label: &'static str,
	start_from: i64,
	members: Vec<Member<T>>,
	by_name: FxHashMap<MemberName, usize>,
}

impl<T> EnumBuilder<T> {
	/// Creates a builder for the enumeration of the named host type.
	pub fn new(label: &'static str) -> Self {
		Self {
			label,
			start_from: 0,
			members: Vec::new(),
			by_name: FxHashMap::default(),
		}
	}

	/// Shifts auto-generated ids: the next free id becomes
	/// `offset + member_count + 1`.
	pub fn start_from(mut self, offset: i64) -> Self {
		self.start_from = offset;
		self
	}

	/// Returns the number of members declared so far.
	pub fn len(&self) -> usize {
		self.members.len()
	}

	/// Returns true if no member has been declared yet.
	pub fn is_empty(&self) -> bool {
		self.members.is_empty()
	}

	/// Declares a member with an auto-generated id and a default payload.
	pub fn member(&mut self, name: impl Into<MemberName>) -> Result<&Member<T>, EnumError>
	where
		T: Default,
	{
		self.member_with(name, MemberOptions::new())
	}

	/// Declares a member with explicit options.
	///
	/// Fails with [`EnumError::RepeatedName`] when the normalized name is
	/// already declared and [`EnumError::RepeatedId`] when the resolved id is
	/// already taken. On failure nothing is registered.
	pub fn member_with(
		&mut self,
		name: impl Into<MemberName>,
		options: MemberOptions<T>,
	) -> Result<&Member<T>, EnumError>
	where
		T: Default,
	{
		let name = name.into();
		if self.by_name.contains_key(name.as_str()) {
			return Err(EnumError::RepeatedName {
				enumeration: self.label,
				name,
			});
		}

		let id = options.id.unwrap_or_else(|| self.next_id());
		if self.members.iter().any(|member| member.id() == id) {
			return Err(EnumError::RepeatedId {
				enumeration: self.label,
				name,
				id,
			});
		}

		trace!(
			enumeration = self.label,
			name = %name,
			id = id.get(),
			"member declared"
		);

		let value = options.value.unwrap_or_default();
		let slot = self.members.len();
		self.members.push(Member::new(id, name.clone(), value));
		self.by_name.insert(name, slot);
		Ok(&self.members[slot])
	}

	/// Freezes the member set into an immutable registry.
	///
	/// Consumes the builder, so no member can be added, removed, or mutated
	/// afterwards.
	pub fn build(self) -> EnumRegistry<T> {
		debug!(
			enumeration = self.label,
			members = self.members.len(),
			"enumeration frozen"
		);
		EnumRegistry::new(self.label, self.members, self.by_name)
	}

	fn next_id(&self) -> MemberId {
		MemberId::new(self.start_from + self.members.len() as i64 + 1)
	}
}
