//! In-memory scene graph.
//!
//! This module models the subset of a host editor's scene that the importer
//! and the collection propagator interact with: typed objects, collections
//! and sound resources. It implements [`SceneSink`] so imports can run
//! without a host, and is what the CLI and the tests import into.

use std::collections::HashMap;
use std::path::Path;

use yavc_math::{Transform, Vec4};

use crate::metadata::Metadata;
use crate::request::{CreationRequest, PointLight, ReflectionProbe, Speaker};
use crate::sink::{ObjectId, SceneSink, SinkError, SinkResult, SoundId};

/// Handle to a collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CollectionId(pub usize);

/// Host object type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Empty,
    Mesh,
    Light,
    LightProbe,
    Speaker,
}

/// How an object instances other content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InstanceType {
    #[default]
    None,
    Collection,
}

/// Type-specific payload of an object.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum ObjectData {
    #[default]
    None,
    Probe(ReflectionProbe),
    Light(PointLight),
    Speaker { settings: Speaker, sound: SoundId },
}

/// An object in the scene.
#[derive(Clone, Debug)]
pub struct SceneObject {
    /// Display name
    pub name: String,

    /// Object type
    pub object_type: ObjectType,

    /// Type-specific data
    pub data: ObjectData,

    /// Location and rotation
    pub transform: Transform,

    /// Viewport tint (RGBA, defaults to white)
    pub color: Vec4,

    /// Instancing mode
    pub instance_type: InstanceType,

    /// Instanced collection (only meaningful with `InstanceType::Collection`)
    pub instance_collection: Option<CollectionId>,

    /// Custom properties
    pub properties: Metadata,
}

impl SceneObject {
    /// Create an object of the given type with default settings.
    pub fn new(name: impl Into<String>, object_type: ObjectType) -> Self {
        Self {
            name: name.into(),
            object_type,
            data: ObjectData::None,
            transform: Transform::default(),
            color: Vec4::ONE,
            instance_type: InstanceType::None,
            instance_collection: None,
            properties: Metadata::new(),
        }
    }

    /// Create an empty that instances `collection`.
    pub fn collection_instancer(name: impl Into<String>, collection: Option<CollectionId>) -> Self {
        Self {
            instance_type: InstanceType::Collection,
            instance_collection: collection,
            ..Self::new(name, ObjectType::Empty)
        }
    }

    /// Build an object from a creation request.
    fn from_request(request: &CreationRequest, object_type: ObjectType, data: ObjectData) -> Self {
        Self {
            name: request.name.clone(),
            object_type,
            data,
            transform: request.transform,
            color: request.color.unwrap_or(Vec4::ONE),
            instance_type: InstanceType::None,
            instance_collection: None,
            properties: request.metadata.clone(),
        }
    }
}

/// A named group of objects.
#[derive(Clone, Debug, Default)]
pub struct Collection {
    /// Collection name
    pub name: String,

    /// Linked objects, in link order
    pub objects: Vec<ObjectId>,
}

/// A loaded sound resource.
#[derive(Clone, Debug)]
pub struct Sound {
    /// Display name (file name of the path)
    pub name: String,

    /// Path the sound was loaded from
    pub path: String,
}

/// A scene: objects, collections and sound resources.
///
/// Collection 0 is always the scene's root collection; imported objects are
/// linked there.
#[derive(Clone, Debug)]
pub struct Scene {
    /// Scene name
    pub name: String,

    /// All objects, linked or not
    pub objects: Vec<SceneObject>,

    /// All collections, root first
    pub collections: Vec<Collection>,

    /// Loaded sounds
    pub sounds: Vec<Sound>,

    /// Sound lookup by path
    sound_index: HashMap<String, SoundId>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new("Scene")
    }
}

impl Scene {
    /// Name of the root collection.
    pub const ROOT_COLLECTION_NAME: &'static str = "Scene Collection";

    /// Create an empty scene with its root collection.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            objects: Vec::new(),
            collections: vec![Collection {
                name: Self::ROOT_COLLECTION_NAME.to_string(),
                objects: Vec::new(),
            }],
            sounds: Vec::new(),
            sound_index: HashMap::new(),
        }
    }

    /// The root collection.
    pub fn root_collection(&self) -> CollectionId {
        CollectionId(0)
    }

    /// Add an unlinked object and return its ID.
    pub fn add_object(&mut self, object: SceneObject) -> ObjectId {
        let id = ObjectId(self.objects.len());
        self.objects.push(object);
        id
    }

    /// Add a collection and return its ID.
    pub fn add_collection(&mut self, name: impl Into<String>) -> CollectionId {
        let id = CollectionId(self.collections.len());
        self.collections.push(Collection {
            name: name.into(),
            objects: Vec::new(),
        });
        id
    }

    /// Link an object into a collection. Linking twice is a no-op.
    pub fn link_to(&mut self, object: ObjectId, collection: CollectionId) -> SinkResult<()> {
        if object.0 >= self.objects.len() {
            return Err(SinkError::UnknownObject(object));
        }
        let collection = self
            .collections
            .get_mut(collection.0)
            .ok_or_else(|| SinkError::Host(format!("Unknown collection: {:?}", collection)))?;

        if !collection.objects.contains(&object) {
            collection.objects.push(object);
        }
        Ok(())
    }

    /// Get an object by ID.
    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id.0)
    }

    /// Find the first object with the given name.
    pub fn find_object(&self, name: &str) -> Option<ObjectId> {
        self.objects
            .iter()
            .position(|o| o.name == name)
            .map(ObjectId)
    }

    /// Get a collection by ID.
    pub fn collection(&self, id: CollectionId) -> Option<&Collection> {
        self.collections.get(id.0)
    }

    /// Get a sound by ID.
    pub fn sound(&self, id: SoundId) -> Option<&Sound> {
        self.sounds.get(id.0)
    }

    /// Objects linked into the root collection, in link order.
    pub fn linked_objects(&self) -> impl Iterator<Item = (ObjectId, &SceneObject)> {
        self.collections[0]
            .objects
            .iter()
            .filter_map(|&id| self.object(id).map(|o| (id, o)))
    }

    /// Get object count.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Count objects of a given type.
    pub fn count_of(&self, object_type: ObjectType) -> usize {
        self.objects
            .iter()
            .filter(|o| o.object_type == object_type)
            .count()
    }
}

impl SceneSink for Scene {
    fn create_collection_instance(&mut self, request: &CreationRequest) -> SinkResult<ObjectId> {
        let mut object = SceneObject::from_request(request, ObjectType::Empty, ObjectData::None);
        object.instance_type = InstanceType::Collection;
        Ok(self.add_object(object))
    }

    fn create_reflection_probe(
        &mut self,
        request: &CreationRequest,
        probe: &ReflectionProbe,
    ) -> SinkResult<ObjectId> {
        let data = ObjectData::Probe(probe.clone());
        Ok(self.add_object(SceneObject::from_request(request, ObjectType::LightProbe, data)))
    }

    fn create_point_light(
        &mut self,
        request: &CreationRequest,
        light: &PointLight,
    ) -> SinkResult<ObjectId> {
        let data = ObjectData::Light(light.clone());
        Ok(self.add_object(SceneObject::from_request(request, ObjectType::Light, data)))
    }

    fn create_speaker(
        &mut self,
        request: &CreationRequest,
        speaker: &Speaker,
        sound: SoundId,
    ) -> SinkResult<ObjectId> {
        if sound.0 >= self.sounds.len() {
            return Err(SinkError::Host(format!("Unknown sound: {:?}", sound)));
        }
        let data = ObjectData::Speaker {
            settings: speaker.clone(),
            sound,
        };
        Ok(self.add_object(SceneObject::from_request(request, ObjectType::Speaker, data)))
    }

    fn load_sound(&mut self, path: &str) -> SinkResult<SoundId> {
        if let Some(&id) = self.sound_index.get(path) {
            log::debug!("Reusing sound '{}'", path);
            return Ok(id);
        }

        let name = Path::new(path)
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(path)
            .to_string();

        let id = SoundId(self.sounds.len());
        self.sounds.push(Sound {
            name,
            path: path.to_string(),
        });
        self.sound_index.insert(path.to_string(), id);
        Ok(id)
    }

    fn link(&mut self, object: ObjectId) -> SinkResult<()> {
        let root = self.root_collection();
        self.link_to(object, root)
    }
}
