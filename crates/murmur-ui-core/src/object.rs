//! Object registry for the Murmur UI layer.
//!
//! Widgets and screen controllers are identified by [`ObjectId`] handles into
//! a process-global registry. An id is a plain non-owning handle: holding one
//! never keeps its target alive, and a stale id simply fails to resolve. This
//! is the mechanism behind every "back-reference" in the UI layer — upward
//! pointers (a row's owning screen, a screen's navigation host) are ids, while
//! ownership always flows root → children.
//!
//! # Example
//!
//! ```
//! use murmur_ui_core::{init_global_registry, global_registry, Object, ObjectBase, ObjectId};
//!
//! struct Screen {
//!     base: ObjectBase,
//! }
//!
//! impl Object for Screen {
//!     fn object_id(&self) -> ObjectId {
//!         self.base.id()
//!     }
//! }
//!
//! init_global_registry();
//! let screen = Screen { base: ObjectBase::new::<Screen>() };
//! assert!(global_registry().unwrap().contains(screen.object_id()));
//! ```

use std::any::TypeId;
use std::fmt;
use std::sync::OnceLock;

use parking_lot::RwLock;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// A unique identifier for a registered object.
    ///
    /// Ids are never reused for a different object within the lifetime of a
    /// registry generation (slotmap versioning), so a dangling id resolves to
    /// nothing rather than to an unrelated object.
    pub struct ObjectId;
}

/// Errors from registry operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectError {
    /// The object id is not (or no longer) registered.
    NotFound(ObjectId),
    /// Reparenting would make an object its own ancestor.
    WouldCreateCycle,
    /// The global registry has not been initialized.
    RegistryNotInitialized,
}

impl fmt::Display for ObjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "object {id:?} is not registered"),
            Self::WouldCreateCycle => write!(f, "reparenting would create a cycle"),
            Self::RegistryNotInitialized => {
                write!(f, "global object registry not initialized; call init_global_registry()")
            }
        }
    }
}

impl std::error::Error for ObjectError {}

/// A specialized Result type for registry operations.
pub type ObjectResult<T> = std::result::Result<T, ObjectError>;

/// The base trait for everything the registry can hand back an id for.
pub trait Object {
    /// Get this object's registry id.
    fn object_id(&self) -> ObjectId;
}

/// Per-object bookkeeping held by the registry.
struct ObjectEntry {
    name: String,
    type_id: TypeId,
    type_name: &'static str,
    parent: Option<ObjectId>,
    children: Vec<ObjectId>,
}

/// Tracks object identity and the parent-child tree.
///
/// The registry owns no objects; it records which ids exist and how they are
/// related. Destroying an id detaches its children (they become roots) rather
/// than cascading — child lifetimes belong to whoever owns the child values.
pub struct ObjectRegistry {
    entries: SlotMap<ObjectId, ObjectEntry>,
}

impl ObjectRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: SlotMap::with_key(),
        }
    }

    /// Register a new object of type `T` and return its id.
    pub fn register<T: Object + 'static>(&mut self) -> ObjectId {
        let id = self.entries.insert(ObjectEntry {
            name: String::new(),
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            parent: None,
            children: Vec::new(),
        });
        tracing::trace!(target: "murmur_ui_core::object", ?id, type_name = std::any::type_name::<T>(), "object registered");
        id
    }

    /// Remove an object from the registry.
    ///
    /// The object is detached from its parent, and its children are promoted
    /// to roots.
    pub fn destroy(&mut self, id: ObjectId) -> ObjectResult<()> {
        let entry = self.entries.remove(id).ok_or(ObjectError::NotFound(id))?;

        if let Some(parent) = entry.parent
            && let Some(parent_entry) = self.entries.get_mut(parent)
        {
            parent_entry.children.retain(|&c| c != id);
        }
        for child in entry.children {
            if let Some(child_entry) = self.entries.get_mut(child) {
                child_entry.parent = None;
            }
        }

        tracing::trace!(target: "murmur_ui_core::object", ?id, "object destroyed");
        Ok(())
    }

    /// Check whether an id is currently registered.
    pub fn contains(&self, id: ObjectId) -> bool {
        self.entries.contains_key(id)
    }

    /// Reparent an object. `None` detaches it to a root.
    pub fn set_parent(&mut self, id: ObjectId, new_parent: Option<ObjectId>) -> ObjectResult<()> {
        if !self.entries.contains_key(id) {
            return Err(ObjectError::NotFound(id));
        }
        if let Some(parent) = new_parent {
            if !self.entries.contains_key(parent) {
                return Err(ObjectError::NotFound(parent));
            }
            // Walk up from the prospective parent; finding `id` means a cycle.
            let mut current = Some(parent);
            while let Some(ancestor) = current {
                if ancestor == id {
                    return Err(ObjectError::WouldCreateCycle);
                }
                current = self.entries.get(ancestor).and_then(|e| e.parent);
            }
        }

        let old_parent = self.entries[id].parent;
        if old_parent == new_parent {
            return Ok(());
        }
        if let Some(old) = old_parent
            && let Some(old_entry) = self.entries.get_mut(old)
        {
            old_entry.children.retain(|&c| c != id);
        }
        if let Some(new) = new_parent {
            self.entries[new].children.push(id);
        }
        self.entries[id].parent = new_parent;
        Ok(())
    }

    /// Get an object's parent id.
    pub fn parent(&self, id: ObjectId) -> ObjectResult<Option<ObjectId>> {
        self.entries
            .get(id)
            .map(|e| e.parent)
            .ok_or(ObjectError::NotFound(id))
    }

    /// Get an object's children, in insertion order.
    pub fn children(&self, id: ObjectId) -> ObjectResult<&[ObjectId]> {
        self.entries
            .get(id)
            .map(|e| e.children.as_slice())
            .ok_or(ObjectError::NotFound(id))
    }

    /// Get an object's name.
    pub fn object_name(&self, id: ObjectId) -> ObjectResult<&str> {
        self.entries
            .get(id)
            .map(|e| e.name.as_str())
            .ok_or(ObjectError::NotFound(id))
    }

    /// Set an object's name.
    pub fn set_object_name(&mut self, id: ObjectId, name: String) -> ObjectResult<()> {
        let entry = self.entries.get_mut(id).ok_or(ObjectError::NotFound(id))?;
        entry.name = name;
        Ok(())
    }

    /// Get the registered type id of an object.
    pub fn type_id(&self, id: ObjectId) -> ObjectResult<TypeId> {
        self.entries
            .get(id)
            .map(|e| e.type_id)
            .ok_or(ObjectError::NotFound(id))
    }

    /// Get the registered type name of an object.
    pub fn type_name(&self, id: ObjectId) -> ObjectResult<&'static str> {
        self.entries
            .get(id)
            .map(|e| e.type_name)
            .ok_or(ObjectError::NotFound(id))
    }

    /// Find a direct child by name.
    pub fn find_child_by_name(&self, id: ObjectId, name: &str) -> ObjectResult<Option<ObjectId>> {
        let entry = self.entries.get(id).ok_or(ObjectError::NotFound(id))?;
        Ok(entry
            .children
            .iter()
            .copied()
            .find(|&c| self.entries.get(c).is_some_and(|e| e.name == name)))
    }

    /// All ancestors of an object, nearest first.
    pub fn ancestors(&self, id: ObjectId) -> ObjectResult<Vec<ObjectId>> {
        if !self.entries.contains_key(id) {
            return Err(ObjectError::NotFound(id));
        }
        let mut out = Vec::new();
        let mut current = self.entries[id].parent;
        while let Some(ancestor) = current {
            out.push(ancestor);
            current = self.entries.get(ancestor).and_then(|e| e.parent);
        }
        Ok(out)
    }

    /// The number of registered objects.
    pub fn object_count(&self) -> usize {
        self.entries.len()
    }
}

impl Default for ObjectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A thread-safe wrapper around [`ObjectRegistry`].
pub struct SharedObjectRegistry {
    inner: RwLock<ObjectRegistry>,
}

impl SharedObjectRegistry {
    /// Create a new shared registry.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(ObjectRegistry::new()),
        }
    }

    /// See [`ObjectRegistry::register`].
    pub fn register<T: Object + 'static>(&self) -> ObjectId {
        self.inner.write().register::<T>()
    }

    /// See [`ObjectRegistry::destroy`].
    pub fn destroy(&self, id: ObjectId) -> ObjectResult<()> {
        self.inner.write().destroy(id)
    }

    /// See [`ObjectRegistry::contains`].
    pub fn contains(&self, id: ObjectId) -> bool {
        self.inner.read().contains(id)
    }

    /// See [`ObjectRegistry::set_parent`].
    pub fn set_parent(&self, id: ObjectId, parent: Option<ObjectId>) -> ObjectResult<()> {
        self.inner.write().set_parent(id, parent)
    }

    /// See [`ObjectRegistry::parent`].
    pub fn parent(&self, id: ObjectId) -> ObjectResult<Option<ObjectId>> {
        self.inner.read().parent(id)
    }

    /// See [`ObjectRegistry::children`].
    pub fn children(&self, id: ObjectId) -> ObjectResult<Vec<ObjectId>> {
        self.inner.read().children(id).map(|c| c.to_vec())
    }

    /// See [`ObjectRegistry::object_name`].
    pub fn object_name(&self, id: ObjectId) -> ObjectResult<String> {
        self.inner.read().object_name(id).map(str::to_owned)
    }

    /// See [`ObjectRegistry::set_object_name`].
    pub fn set_object_name(&self, id: ObjectId, name: String) -> ObjectResult<()> {
        self.inner.write().set_object_name(id, name)
    }

    /// See [`ObjectRegistry::type_name`].
    pub fn type_name(&self, id: ObjectId) -> ObjectResult<&'static str> {
        self.inner.read().type_name(id)
    }

    /// See [`ObjectRegistry::find_child_by_name`].
    pub fn find_child_by_name(&self, id: ObjectId, name: &str) -> ObjectResult<Option<ObjectId>> {
        self.inner.read().find_child_by_name(id, name)
    }

    /// See [`ObjectRegistry::ancestors`].
    pub fn ancestors(&self, id: ObjectId) -> ObjectResult<Vec<ObjectId>> {
        self.inner.read().ancestors(id)
    }

    /// See [`ObjectRegistry::object_count`].
    pub fn object_count(&self) -> usize {
        self.inner.read().object_count()
    }
}

impl Default for SharedObjectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_REGISTRY: OnceLock<SharedObjectRegistry> = OnceLock::new();

/// Initialize the process-global registry. Idempotent.
pub fn init_global_registry() {
    GLOBAL_REGISTRY.get_or_init(SharedObjectRegistry::new);
}

/// Get the process-global registry.
pub fn global_registry() -> ObjectResult<&'static SharedObjectRegistry> {
    GLOBAL_REGISTRY.get().ok_or(ObjectError::RegistryNotInitialized)
}

/// Handle held by registered objects: registers on construction, deregisters
/// on drop. Compose this into a struct and delegate [`Object::object_id`].
pub struct ObjectBase {
    id: ObjectId,
}

impl ObjectBase {
    /// Create a new base, registering the object in the global registry.
    ///
    /// # Panics
    ///
    /// Panics if the global registry is not initialized.
    pub fn new<T: Object + 'static>() -> Self {
        let registry = global_registry().expect("object registry not initialized");
        let id = registry.register::<T>();
        Self { id }
    }

    /// Get this object's id.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Get this object's name from the registry.
    pub fn name(&self) -> String {
        global_registry()
            .and_then(|r| r.object_name(self.id))
            .unwrap_or_default()
    }

    /// Set this object's name in the registry.
    pub fn set_name(&self, name: impl Into<String>) {
        if let Ok(registry) = global_registry() {
            let _ = registry.set_object_name(self.id, name.into());
        }
    }

    /// Get the parent object id.
    pub fn parent(&self) -> Option<ObjectId> {
        global_registry()
            .and_then(|r| r.parent(self.id))
            .ok()
            .flatten()
    }

    /// Set the parent object.
    pub fn set_parent(&self, parent: Option<ObjectId>) -> ObjectResult<()> {
        global_registry()?.set_parent(self.id, parent)
    }

    /// Get child object ids.
    pub fn children(&self) -> Vec<ObjectId> {
        global_registry()
            .and_then(|r| r.children(self.id))
            .unwrap_or_default()
    }

    /// Find a direct child by name.
    pub fn find_child_by_name(&self, name: &str) -> Option<ObjectId> {
        global_registry()
            .and_then(|r| r.find_child_by_name(self.id, name))
            .ok()
            .flatten()
    }
}

impl Drop for ObjectBase {
    fn drop(&mut self) {
        if let Ok(registry) = global_registry() {
            let _ = registry.destroy(self.id);
        }
    }
}

static_assertions::assert_impl_all!(SharedObjectRegistry: Send, Sync);
