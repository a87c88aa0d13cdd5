//! Host-type facade: the [`Enumerated`] trait and the [`define_enum!`] macro.

use crate::error::EnumError;
use crate::member::{Member, MemberId};
use crate::name::MemberName;
use crate::registry::EnumRegistry;
use crate::resolve::{self, FieldInput};

/// A host type with a closed enumeration attached.
///
/// One registry exists per implementing type, created once and never
/// replaced. The provided methods are the complete query surface — every
/// read operation of [`EnumRegistry`] plus [`resolve`](Self::resolve) —
/// delegated to [`enumeration`](Self::enumeration); nothing else is proxied.
///
/// Implementations normally come from [`define_enum!`], which backs
/// `enumeration` with a per-type static.
pub trait Enumerated: Sized + Send + Sync + 'static {
	/// Returns the frozen registry of this type's enumeration.
	fn enumeration() -> &'static EnumRegistry<Self>;

	/// Looks up a member by its name token.
	fn lookup(token: impl AsRef<str>) -> Option<&'static Member<Self>> {
		Self::enumeration().get(token)
	}

	/// Returns the member with the given id, if any.
	fn find_by_id(id: impl Into<MemberId>) -> Option<&'static Member<Self>> {
		Self::enumeration().find_by_id(id)
	}

	/// Returns the members with the given ids, in declaration order.
	fn find_by_ids(ids: &[MemberId]) -> Vec<&'static Member<Self>> {
		Self::enumeration().find_by_ids(ids)
	}

	/// Like [`find_by_id`](Self::find_by_id), but fails with
	/// [`EnumError::UnknownId`] when no member matches.
	fn find(id: impl Into<MemberId>) -> Result<&'static Member<Self>, EnumError> {
		Self::enumeration().find(id)
	}

	/// Returns every member, in declaration order.
	fn all() -> &'static [Member<Self>] {
		Self::enumeration().all()
	}

	/// Returns the member name tokens, in declaration order.
	fn names() -> impl Iterator<Item = &'static MemberName> {
		Self::enumeration().names()
	}

	/// Returns the member ids, in declaration order.
	fn ids() -> impl Iterator<Item = MemberId> {
		Self::enumeration().ids()
	}

	/// Returns the first declared member, if any.
	fn first() -> Option<&'static Member<Self>> {
		Self::enumeration().first()
	}

	/// Returns the last declared member, if any.
	fn last() -> Option<&'static Member<Self>> {
		Self::enumeration().last()
	}

	/// Returns true iff a member carries the given id.
	fn is_valid_id(id: impl Into<MemberId>) -> bool {
		Self::enumeration().is_valid_id(id)
	}

	/// Returns true iff a member carries the given name token.
	fn is_valid_name(token: impl AsRef<str>) -> bool {
		Self::enumeration().is_valid_name(token)
	}

	/// Resolves an arbitrary persistence-boundary input into the id to
	/// store, if any. See [`resolve`](crate::resolve()).
	fn resolve<'a>(input: impl Into<FieldInput<'a, Self>>) -> Result<Option<MemberId>, EnumError> {
		resolve::resolve(input.into(), Self::enumeration())
	}
}

/// Declares the enumeration of a host type.
///
/// Generates the [`Enumerated`] impl backed by a lazily-built per-type
/// static, plus one accessor function per member on the host type. Members
/// receive ids counting up from 1 (or from `start_from + 1`) in declaration
/// order; `id = <expr>` overrides the generated id and `value = <expr>`
/// replaces the `T::default()` payload.
///
/// Definition errors (repeated name, repeated id) abort with a panic the
/// first time the enumeration is touched.
///
/// ```
/// use ordinal_registry::define_enum;
///
/// #[derive(Debug, Default)]
/// struct Role;
///
/// define_enum! {
/// 	Role {
/// 		member admin;
/// 		member manager, id = 10;
/// 		member employee;
/// 	}
/// }
///
/// assert_eq!(Role::admin().id().get(), 1);
/// assert_eq!(Role::manager().id().get(), 10);
/// assert!(Role::employee().is_named("employee"));
/// ```
#[macro_export]
macro_rules! define_enum {
	($ty:ident { $($body:tt)* }) => {
		$crate::define_enum!(@impl $ty, 0, $($body)*);
	};
	($ty:ident, start_from = $offset:literal { $($body:tt)* }) => {
		$crate::define_enum!(@impl $ty, $offset, $($body)*);
	};

	(@impl $ty:ident, $offset:expr, $($body:tt)*) => {
		impl $crate::Enumerated for $ty {
			fn enumeration() -> &'static $crate::EnumRegistry<Self> {
				static ENUMERATION: ::std::sync::LazyLock<$crate::EnumRegistry<$ty>> =
					::std::sync::LazyLock::new(|| {
						let mut builder =
							$crate::EnumBuilder::new(stringify!($ty)).start_from($offset);
						$crate::define_enum!(@declare builder, $($body)*);
						builder.build()
					});
				&ENUMERATION
			}
		}

		$crate::define_enum!(@accessors $ty, $($body)*);
	};

	(@declare $builder:ident,) => {};
	(@declare $builder:ident, member $name:ident; $($rest:tt)*) => {
		if let Err(err) = $builder.member(stringify!($name)) {
			panic!("enumeration definition failed: {err}");
		}
		$crate::define_enum!(@declare $builder, $($rest)*);
	};
	(@declare $builder:ident, member $name:ident, $($opt:ident = $val:expr),+; $($rest:tt)*) => {
		let options = $crate::MemberOptions::new()$(.$opt($val))+;
		if let Err(err) = $builder.member_with(stringify!($name), options) {
			panic!("enumeration definition failed: {err}");
		}
		$crate::define_enum!(@declare $builder, $($rest)*);
	};

	(@accessors $ty:ident,) => {};
	(@accessors $ty:ident, member $name:ident $(, $opt:ident = $val:expr)*; $($rest:tt)*) => {
		impl $ty {
			#[doc = concat!("Returns the `", stringify!($name), "` member.")]
			pub fn $name() -> &'static $crate::Member<$ty> {
				<$ty as $crate::Enumerated>::lookup(stringify!($name))
					.expect("declared by define_enum!")
			}
		}
		$crate::define_enum!(@accessors $ty, $($rest)*);
	};
}
