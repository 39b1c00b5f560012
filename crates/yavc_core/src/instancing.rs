//! Mass instancing: copy one instancer's collection onto many empties.
//!
//! The source must be a collection instancer with a collection assigned.
//! Every target that is an empty already instancing a collection receives
//! the source's collection; other targets are skipped.

use thiserror::Error;

use crate::scene::{CollectionId, InstanceType, ObjectType, Scene, SceneObject};
use crate::sink::ObjectId;

/// Precondition failures of the collection transfer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InstancingError {
    #[error("Source is not a collection instancer")]
    NotCollectionInstancer,

    #[error("Source has no collection to transfer")]
    NoCollection,

    #[error("Unknown object: {0:?}")]
    UnknownObject(ObjectId),
}

/// Object interface needed by the collection transfer.
pub trait CollectionInstancer {
    /// Whether the object is an empty (has no geometry of its own).
    fn is_empty_object(&self) -> bool;

    fn instance_type(&self) -> InstanceType;

    fn instance_collection(&self) -> Option<CollectionId>;

    fn set_instance_collection(&mut self, collection: Option<CollectionId>);
}

impl CollectionInstancer for SceneObject {
    fn is_empty_object(&self) -> bool {
        self.object_type == ObjectType::Empty
    }

    fn instance_type(&self) -> InstanceType {
        self.instance_type
    }

    fn instance_collection(&self) -> Option<CollectionId> {
        self.instance_collection
    }

    fn set_instance_collection(&mut self, collection: Option<CollectionId>) {
        self.instance_collection = collection;
    }
}

/// Validate a source object and return the collection it instances.
pub fn source_collection<T: CollectionInstancer + ?Sized>(
    source: &T,
) -> Result<CollectionId, InstancingError> {
    if source.instance_type() != InstanceType::Collection {
        return Err(InstancingError::NotCollectionInstancer);
    }
    source
        .instance_collection()
        .ok_or(InstancingError::NoCollection)
}

/// Whether a target takes part in the transfer.
pub fn accepts_collection<T: CollectionInstancer + ?Sized>(target: &T) -> bool {
    target.is_empty_object() && target.instance_type() == InstanceType::Collection
}

/// Assign `collection` to every accepting target. Returns the number of
/// targets updated.
pub fn assign_collection<'a, T, I>(collection: CollectionId, targets: I) -> usize
where
    T: CollectionInstancer + 'a,
    I: IntoIterator<Item = &'a mut T>,
{
    let mut n = 0;
    for target in targets {
        if !accepts_collection(&*target) {
            continue;
        }
        target.set_instance_collection(Some(collection));
        n += 1;
    }
    n
}

/// Copy the collection of `source` onto the selected objects of `scene`.
///
/// Fails without touching any object if the source is not a collection
/// instancer or has no collection. Selection entries that do not exist in
/// the scene are skipped like any other non-matching target. The source may
/// itself be part of the selection.
pub fn transfer_collection(
    scene: &mut Scene,
    source: ObjectId,
    selection: &[ObjectId],
) -> Result<usize, InstancingError> {
    let source_object = scene
        .object(source)
        .ok_or(InstancingError::UnknownObject(source))?;
    let collection = source_collection(source_object)?;

    let mut selected: Vec<ObjectId> = selection.to_vec();
    selected.sort_unstable();
    selected.dedup();

    let targets = scene
        .objects
        .iter_mut()
        .enumerate()
        .filter(|(i, _)| selected.binary_search(&ObjectId(*i)).is_ok())
        .map(|(_, o)| o);

    let n = assign_collection(collection, targets);
    log::info!("Transferred collection {:?} to {} instance(s)", collection, n);
    Ok(n)
}
