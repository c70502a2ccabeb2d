use core::marker::PhantomData;

pub mod attribute;
pub mod definition;
pub mod module;

pub use attribute::{Attribute, ConstValue};
pub use definition::{
  HandlerRegistration, MethodDefinition, MethodId, Parameter, RemoteCallKind, TypeDefId,
  TypeDefinition, TypeRef, Visibility,
};
pub use module::ModuleDefinition;

/// Typed index into a [`Store`].
#[repr(transparent)]
#[derive(Eq, PartialEq, Hash, Debug, Default)]
pub struct Id<T>(u32, PhantomData<*const T>);

// `Id` is a plain numeric index; it is `Copy`/`Clone` regardless of `T`.
// Hand-written so the derives don't add a spurious `T: Copy`/`T: Clone`
// bound (the marker `PhantomData<*const T>` would otherwise propagate it).
impl<T> Copy for Id<T> {}

impl<T> Clone for Id<T> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<T> Id<T> {
  pub fn index(&self) -> usize {
    self.0 as usize
  }
}

/// Append-only arena of definitions, addressed by [`Id`].
#[derive(Debug, Clone)]
pub struct Store<T> {
  data: Vec<T>,
}

impl<T> Default for Store<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Store<T> {
  pub fn new() -> Self {
    Self { data: Vec::new() }
  }

  pub fn alloc(
    &mut self,
    v: T,
  ) -> Id<T> {
    let id = Id(self.data.len() as u32, PhantomData);
    self.data.push(v);

    id
  }

  pub fn get(
    &self,
    id: &Id<T>,
  ) -> &T {
    &self.data[id.0 as usize]
  }

  pub fn get_mut(
    &mut self,
    id: &Id<T>,
  ) -> &mut T {
    &mut self.data[id.0 as usize]
  }

  pub fn iter(&self) -> impl Iterator<Item = (Id<T>, &T)> {
    self
      .data
      .iter()
      .enumerate()
      .map(|(index, v)| (Id(index as u32, PhantomData), v))
  }

  pub fn len(&self) -> usize {
    self.data.len()
  }

  pub fn is_empty(&self) -> bool {
    self.data.is_empty()
  }
}
