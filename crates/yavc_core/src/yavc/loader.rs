//! High-level YAVC scene import.
//!
//! Importing happens in two steps:
//!
//! 1. **Plan**: each collection of the document is mapped by a stateless
//!    function to a list of [`CreationRequest`]s. Nothing touches the host.
//! 2. **Apply**: requests are handed to a [`SceneSink`] in order.
//!
//! Collections are planned and applied in file order: entities, instances,
//! cubemaps, lights, ambients. A failure aborts the import; objects created
//! before the failure stay in the scene.

use std::path::Path;

use thiserror::Error;
use yavc_math::{rgb255_to_rgb, rgb255_to_rgba, Transform};

use crate::metadata::Metadata;
use crate::request::{CreationRequest, ObjectKind, PointLight, ReflectionProbe, Speaker};
use crate::sink::{apply_request, ObjectId, SceneSink, SinkError};
use crate::yavc::naming::{
    entity_name, indexed_name, instance_name, AMBIENT_TAG, ENV_CUBEMAP_TAG, LIGHT_TAG,
};
use crate::yavc::options::ImportOptions;
use crate::yavc::parser::{parse_scene, ParseError};
use crate::yavc::types::{
    AmbientRecord, EntityRecord, EnvCubemapRecord, InstanceRecord, LegacyEntity, LightRecord,
    SceneFile, YavcDocument,
};

/// Errors that can occur during YAVC import.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Scene error: {0}")]
    Sink(#[from] SinkError),
}

/// Result type for import operations.
pub type ImportResult<T> = Result<T, ImportError>;

/// Creation requests for a whole document, grouped by source collection.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct ImportPlan {
    pub entities: Vec<CreationRequest>,
    pub instances: Vec<CreationRequest>,
    pub env_cubemaps: Vec<CreationRequest>,
    pub lights: Vec<CreationRequest>,
    pub ambients: Vec<CreationRequest>,
}

impl ImportPlan {
    /// All requests in application order.
    pub fn requests(&self) -> impl Iterator<Item = &CreationRequest> {
        self.entities
            .iter()
            .chain(&self.instances)
            .chain(&self.env_cubemaps)
            .chain(&self.lights)
            .chain(&self.ambients)
    }

    /// Total number of requests.
    pub fn len(&self) -> usize {
        self.entities.len()
            + self.instances.len()
            + self.env_cubemaps.len()
            + self.lights.len()
            + self.ambients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// What an import created.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImportSummary {
    pub entities: usize,
    pub instances: usize,
    pub env_cubemaps: usize,
    pub lights: usize,
    pub ambients: usize,

    /// Created objects in creation order
    pub objects: Vec<ObjectId>,
}

impl ImportSummary {
    /// Total number of created objects.
    pub fn total(&self) -> usize {
        self.objects.len()
    }
}

/// Map entity records to collection-instance requests.
pub fn plan_entities(records: &[EntityRecord], namespace: &str) -> Vec<CreationRequest> {
    records
        .iter()
        .map(|record| {
            let mut metadata = Metadata::new();
            metadata.insert_namespaced(namespace, "model", record.model.as_str());
            metadata.insert_namespaced(namespace, "skin", &record.skin);

            CreationRequest::new(
                entity_name(&record.model, &record.skin),
                ObjectKind::CollectionInstance,
                Transform::new(record.location, record.rotation),
            )
            .with_color(rgb255_to_rgba(record.color))
            .with_metadata(metadata)
        })
        .collect()
}

/// Map instance records to collection-instance requests.
pub fn plan_instances(records: &[InstanceRecord], namespace: &str) -> Vec<CreationRequest> {
    records
        .iter()
        .map(|record| {
            let mut metadata = Metadata::new();
            metadata.insert_namespaced(namespace, "filename", record.file.as_str());

            CreationRequest::new(
                instance_name(&record.file),
                ObjectKind::CollectionInstance,
                Transform::new(record.location, record.rotation),
            )
            .with_metadata(metadata)
        })
        .collect()
}

/// Map cubemap records to reflection probe requests.
pub fn plan_env_cubemaps(records: &[EnvCubemapRecord], namespace: &str) -> Vec<CreationRequest> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let mut metadata = Metadata::new();
            metadata.insert_namespaced(namespace, "sides", record.sides.clone());

            CreationRequest::new(
                indexed_name(ENV_CUBEMAP_TAG, i),
                ObjectKind::ReflectionProbe(ReflectionProbe::default()),
                Transform::from_location(record.location),
            )
            .with_metadata(metadata)
        })
        .collect()
}

/// Map light records to point light requests.
pub fn plan_lights(records: &[LightRecord]) -> Vec<CreationRequest> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let light = PointLight {
                color: rgb255_to_rgb(record.color),
                energy: record.strength,
            };
            CreationRequest::new(
                indexed_name(LIGHT_TAG, i),
                ObjectKind::PointLight(light),
                Transform::from_location(record.location),
            )
        })
        .collect()
}

/// Map ambient records to speaker requests.
pub fn plan_ambients(records: &[AmbientRecord]) -> Vec<CreationRequest> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let speaker = Speaker {
                pitch: record.pitch,
                distance_max: record.radius,
                sound_path: record.path.clone(),
            };
            CreationRequest::new(
                indexed_name(AMBIENT_TAG, i),
                ObjectKind::Speaker(speaker),
                Transform::from_location(record.location),
            )
        })
        .collect()
}

/// Map legacy line entities to collection-instance requests.
///
/// Names are used verbatim and no metadata is attached.
pub fn plan_legacy_entities(entities: &[LegacyEntity]) -> Vec<CreationRequest> {
    entities
        .iter()
        .map(|entity| {
            CreationRequest::new(
                entity.name.clone(),
                ObjectKind::CollectionInstance,
                Transform::new(entity.location, entity.rotation),
            )
            .with_color(rgb255_to_rgba(entity.color))
        })
        .collect()
}

/// Plan a whole JSON document.
pub fn plan_document(document: &YavcDocument, options: &ImportOptions) -> ImportPlan {
    let ns = options.namespace.as_str();
    ImportPlan {
        entities: plan_entities(&document.entities, ns),
        instances: plan_instances(&document.instances, ns),
        env_cubemaps: plan_env_cubemaps(&document.env_cubemaps, ns),
        lights: plan_lights(&document.lights),
        ambients: plan_ambients(&document.ambients),
    }
}

/// Plan a parsed scene file of either revision.
pub fn plan_scene_file(file: &SceneFile, options: &ImportOptions) -> ImportPlan {
    match file {
        SceneFile::Document(document) => plan_document(document, options),
        SceneFile::Legacy(entities) => ImportPlan {
            entities: plan_legacy_entities(entities),
            ..Default::default()
        },
    }
}

/// Parse and plan scene file content.
pub fn plan_from_string(content: &str, options: &ImportOptions) -> ImportResult<ImportPlan> {
    let file = parse_scene(content, options.format)?;
    Ok(plan_scene_file(&file, options))
}

/// Apply a plan to a sink.
pub fn apply_plan<S: SceneSink + ?Sized>(plan: &ImportPlan, sink: &mut S) -> ImportResult<ImportSummary> {
    let mut summary = ImportSummary::default();

    for request in &plan.entities {
        summary.objects.push(apply_request(sink, request)?);
        summary.entities += 1;
    }
    for request in &plan.instances {
        summary.objects.push(apply_request(sink, request)?);
        summary.instances += 1;
    }
    for request in &plan.env_cubemaps {
        summary.objects.push(apply_request(sink, request)?);
        summary.env_cubemaps += 1;
    }
    for request in &plan.lights {
        summary.objects.push(apply_request(sink, request)?);
        summary.lights += 1;
    }
    for request in &plan.ambients {
        summary.objects.push(apply_request(sink, request)?);
        summary.ambients += 1;
    }

    Ok(summary)
}

/// Import YAVC content into a sink.
pub fn import_yavc_from_string<S: SceneSink + ?Sized>(
    content: &str,
    sink: &mut S,
    options: &ImportOptions,
) -> ImportResult<ImportSummary> {
    let plan = plan_from_string(content, options)?;
    let summary = apply_plan(&plan, sink)?;

    log::info!(
        "Imported {} object(s): {} entities, {} instances, {} cubemaps, {} lights, {} ambients",
        summary.total(),
        summary.entities,
        summary.instances,
        summary.env_cubemaps,
        summary.lights,
        summary.ambients
    );

    Ok(summary)
}

/// Load a YAVC file and import it into a sink.
///
/// # Example
///
/// ```ignore
/// use yavc_core::{import_yavc, ImportOptions, Scene};
///
/// let mut scene = Scene::new("map");
/// let summary = import_yavc("map.yavc", &mut scene, &ImportOptions::default())?;
/// println!("Created {} objects", summary.total());
/// ```
pub fn import_yavc<P: AsRef<Path>, S: SceneSink + ?Sized>(
    path: P,
    sink: &mut S,
    options: &ImportOptions,
) -> ImportResult<ImportSummary> {
    let path = path.as_ref();
    log::info!("Importing YAVC file: {}", path.display());

    let content = std::fs::read_to_string(path)?;
    import_yavc_from_string(&content, sink, options)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::metadata::PropertyValue;
    use crate::request::ProbeShape;
    use crate::scene::{InstanceType, ObjectData, ObjectType, Scene};
    use crate::sink::{SinkResult, SoundId};
    use crate::yavc::options::SceneFormat;
    use crate::yavc::types::Skin;
    use yavc_math::{Vec3, Vec4};

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    const EMPTY: &str =
        r#"{ "Entities": [], "Instances": [], "EnvCubemaps": [], "Lights": [], "Ambients": [] }"#;

    const MAP: &str = r#"{
        "Entities": [
            { "Model": "Models/Barrel A", "Skin": "rusty", "Color": [255, 128, 0],
              "Location": [1, 2, 3], "Rotation": [0, 0, 90] },
            { "Model": "models/props/crate.mdl", "Skin": 0, "Color": [0, 0, 255],
              "Location": [0, 0, 0], "Rotation": [0, 0, 0] }
        ],
        "Instances": [
            { "File": "Instances/Door Frame.yavc", "Location": [10, 0, 0], "Rotation": [0, 45, 0] }
        ],
        "EnvCubemaps": [
            { "Location": [0, 0, 128], "Sides": [1, 2, 3] },
            { "Location": [0, 0, 256], "Sides": [] }
        ],
        "Lights": [
            { "Color": [255, 128, 0], "Strength": 300, "Location": [0, 64, 0] }
        ],
        "Ambients": [
            { "Pitch": 1.0, "Radius": 1250, "Path": "ambient/wind.wav", "Location": [1, 1, 1] },
            { "Pitch": 0.8, "Radius": 500, "Path": "ambient/wind.wav", "Location": [2, 2, 2] }
        ]
    }"#;

    fn entity(model: &str, skin: Skin, color: [f32; 3]) -> EntityRecord {
        EntityRecord {
            model: model.to_string(),
            skin,
            color,
            location: [1.0, 2.0, 3.0],
            rotation: [0.0, 0.0, 90.0],
        }
    }

    #[test]
    fn test_plan_entities() {
        init_logging();
        let records = vec![entity(
            "Models/Barrel A",
            Skin::Name("rusty".to_string()),
            [255.0, 128.0, 0.0],
        )];
        let plan = plan_entities(&records, "yavc");

        assert_eq!(plan.len(), 1);
        let request = &plan[0];
        assert_eq!(request.name, "barrel_a:rusty");
        assert_eq!(request.kind, ObjectKind::CollectionInstance);
        assert_eq!(request.transform.location, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(request.transform.rotation, Vec3::new(0.0, 0.0, 90.0));

        let color = request.color.unwrap();
        assert_eq!(color.x, 1.0);
        assert!((color.y - 0.502).abs() < 0.001);
        assert_eq!(color.z, 0.0);
        assert_eq!(color.w, 1.0);

        assert_eq!(
            request.metadata.get("yavc:model"),
            Some(&PropertyValue::from("Models/Barrel A"))
        );
        assert_eq!(
            request.metadata.get("yavc:skin"),
            Some(&PropertyValue::from("rusty"))
        );
    }

    #[test]
    fn test_plan_uses_namespace() {
        init_logging();
        let records = vec![entity("models/a.mdl", Skin::Index(3), [0.0; 3])];
        let plan = plan_entities(&records, "studio");

        assert_eq!(plan[0].metadata.get("studio:skin"), Some(&PropertyValue::Int(3)));
        assert!(plan[0].metadata.get("yavc:skin").is_none());
    }

    #[test]
    fn test_plan_instances() {
        init_logging();
        let records = vec![InstanceRecord {
            file: "Instances/Door Frame.yavc".to_string(),
            location: [10.0, 0.0, 0.0],
            rotation: [0.0, 45.0, 0.0],
        }];
        let plan = plan_instances(&records, "yavc");

        assert_eq!(plan[0].name, "door_frame.yavc");
        assert_eq!(plan[0].color, None);
        assert_eq!(plan[0].transform.rotation, Vec3::new(0.0, 45.0, 0.0));
        assert_eq!(
            plan[0].metadata.get("yavc:filename"),
            Some(&PropertyValue::from("Instances/Door Frame.yavc"))
        );
    }

    #[test]
    fn test_plan_lights_has_no_alpha() {
        init_logging();
        let records = vec![LightRecord {
            color: [255.0, 128.0, 0.0],
            strength: 300.0,
            location: [0.0, 64.0, 0.0],
        }];
        let plan = plan_lights(&records);

        assert_eq!(plan[0].name, "light:0");
        assert_eq!(plan[0].color, None);
        match &plan[0].kind {
            ObjectKind::PointLight(light) => {
                assert_eq!(light.energy, 300.0);
                assert_eq!(light.color.x, 1.0);
                assert!((light.color.y - 0.502).abs() < 0.001);
                assert_eq!(light.color.z, 0.0);
            }
            other => panic!("expected point light, got {:?}", other),
        }
    }

    #[test]
    fn test_indexed_names_restart_per_collection() {
        init_logging();
        let doc = crate::yavc::parser::parse_document(MAP).unwrap();
        let plan = plan_document(&doc, &ImportOptions::default());

        let names: Vec<&str> = plan.requests().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "barrel_a:rusty",
                "props/crate.mdl:0",
                "door_frame.yavc",
                "env_cubemap:0",
                "env_cubemap:1",
                "light:0",
                "ambient:0",
                "ambient:1",
            ]
        );
    }

    #[test]
    fn test_import_map_into_scene() {
        init_logging();
        let mut scene = Scene::new("map");
        let summary = import_yavc_from_string(MAP, &mut scene, &ImportOptions::default()).unwrap();

        assert_eq!(summary.total(), 8);
        assert_eq!(summary.entities, 2);
        assert_eq!(summary.instances, 1);
        assert_eq!(summary.env_cubemaps, 2);
        assert_eq!(summary.lights, 1);
        assert_eq!(summary.ambients, 2);
        assert_eq!(scene.linked_objects().count(), 8);

        // Instancers are left without a collection
        let door = scene.object(scene.find_object("door_frame.yavc").unwrap()).unwrap();
        assert_eq!(door.instance_type, InstanceType::Collection);
        assert_eq!(door.instance_collection, None);
        assert_eq!(door.color, Vec4::ONE);

        let probe = scene.object(scene.find_object("env_cubemap:0").unwrap()).unwrap();
        assert_eq!(probe.object_type, ObjectType::LightProbe);
        assert_eq!(probe.transform.rotation, Vec3::ZERO);
        match &probe.data {
            ObjectData::Probe(p) => {
                assert_eq!(p.shape, ProbeShape::Box);
                assert_eq!(p.clip_end, 20000.0);
                assert_eq!(p.influence_distance, 200.0);
            }
            other => panic!("expected probe data, got {:?}", other),
        }
        assert_eq!(
            probe.properties.get("yavc:sides"),
            Some(&PropertyValue::Blob(serde_json::json!([1, 2, 3])))
        );

        // Both ambients share one sound
        assert_eq!(scene.sounds.len(), 1);
        let ambient = scene.object(scene.find_object("ambient:1").unwrap()).unwrap();
        match &ambient.data {
            ObjectData::Speaker { settings, sound } => {
                assert!((settings.pitch - 0.8).abs() < 1e-6);
                assert_eq!(settings.distance_max, 500.0);
                assert_eq!(*sound, SoundId(0));
            }
            other => panic!("expected speaker data, got {:?}", other),
        }
        assert_eq!(ambient.transform.location, Vec3::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn test_empty_document_creates_nothing() {
        init_logging();
        let mut scene = Scene::new("empty");
        let summary = import_yavc_from_string(EMPTY, &mut scene, &ImportOptions::default()).unwrap();

        assert_eq!(summary, ImportSummary::default());
        assert_eq!(scene.object_count(), 0);
    }

    #[test]
    fn test_import_legacy_lines() {
        init_logging();
        let mut scene = Scene::new("legacy");
        let content = "prop_barrel 255 0 0 1 2 3 0 0 1.57\nprop_crate 0 0 0 0 0 0 0 0 0\n";

        let summary = import_yavc_from_string(content, &mut scene, &ImportOptions::default()).unwrap();

        assert_eq!(summary.entities, 2);
        let barrel = scene.object(scene.find_object("prop_barrel").unwrap()).unwrap();
        assert_eq!(barrel.instance_type, InstanceType::Collection);
        assert_eq!(barrel.color, Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert!(barrel.properties.is_empty());
    }

    #[test]
    fn test_malformed_document_fails() {
        init_logging();
        let mut scene = Scene::new("bad");
        let result = import_yavc_from_string("{ not json", &mut scene, &ImportOptions::default());

        assert!(matches!(result, Err(ImportError::Parse(_))));
        assert_eq!(scene.object_count(), 0);
    }

    #[test]
    fn test_forced_format_overrides_detection() {
        init_logging();
        let mut scene = Scene::new("forced");
        let options = ImportOptions::default().with_format(SceneFormat::Lines);
        let result = import_yavc_from_string(EMPTY, &mut scene, &options);

        assert!(matches!(
            result,
            Err(ImportError::Parse(ParseError::Line { line: 1, .. }))
        ));
    }

    /// Sink that refuses to load sounds.
    struct NoAudio(Scene);

    impl SceneSink for NoAudio {
        fn create_collection_instance(&mut self, request: &CreationRequest) -> SinkResult<ObjectId> {
            self.0.create_collection_instance(request)
        }

        fn create_reflection_probe(
            &mut self,
            request: &CreationRequest,
            probe: &ReflectionProbe,
        ) -> SinkResult<ObjectId> {
            self.0.create_reflection_probe(request, probe)
        }

        fn create_point_light(
            &mut self,
            request: &CreationRequest,
            light: &PointLight,
        ) -> SinkResult<ObjectId> {
            self.0.create_point_light(request, light)
        }

        fn create_speaker(
            &mut self,
            request: &CreationRequest,
            speaker: &Speaker,
            sound: SoundId,
        ) -> SinkResult<ObjectId> {
            self.0.create_speaker(request, speaker, sound)
        }

        fn load_sound(&mut self, path: &str) -> SinkResult<SoundId> {
            Err(SinkError::Sound {
                path: path.to_string(),
                message: "audio disabled".to_string(),
            })
        }

        fn link(&mut self, object: ObjectId) -> SinkResult<()> {
            self.0.link(object)
        }
    }

    #[test]
    fn test_failure_keeps_created_objects() {
        init_logging();
        let mut sink = NoAudio(Scene::new("partial"));
        let result = import_yavc_from_string(MAP, &mut sink, &ImportOptions::default());

        assert!(matches!(result, Err(ImportError::Sink(SinkError::Sound { .. }))));
        // Everything before the first ambient was created and linked
        assert_eq!(sink.0.object_count(), 6);
        assert_eq!(sink.0.linked_objects().count(), 6);
    }

    #[test]
    fn test_import_from_file() {
        init_logging();
        let mut file = tempfile::Builder::new().suffix(".yavc").tempfile().unwrap();
        file.write_all(MAP.as_bytes()).unwrap();

        let mut scene = Scene::new("file");
        let summary = import_yavc(file.path(), &mut scene, &ImportOptions::default()).unwrap();
        assert_eq!(summary.total(), 8);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        init_logging();
        let dir = tempfile::tempdir().unwrap();
        let mut scene = Scene::new("missing");

        let result = import_yavc(dir.path().join("nope.yavc"), &mut scene, &ImportOptions::default());
        assert!(matches!(result, Err(ImportError::Io(_))));
    }

    /// Helper to get test asset path (works from any working directory)
    fn test_asset_path(relative: &str) -> std::path::PathBuf {
        let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
            .unwrap_or_else(|_| ".".to_string());
        let crate_root = std::path::Path::new(&manifest_dir);
        // Go up to workspace root
        let workspace_root = crate_root.parent().unwrap().parent().unwrap();
        workspace_root.join(relative)
    }

    #[test]
    fn test_import_sample_asset() {
        init_logging();
        let mut scene = Scene::new("sample_map");
        let path = test_asset_path("assets/sample_map.yavc");
        let summary = import_yavc(&path, &mut scene, &ImportOptions::default()).unwrap();

        assert_eq!(summary.entities, 3);
        assert_eq!(summary.instances, 1);
        assert_eq!(summary.env_cubemaps, 2);
        assert_eq!(summary.lights, 2);
        assert_eq!(summary.ambients, 3);
        assert_eq!(scene.count_of(ObjectType::Empty), 4);
        assert_eq!(scene.count_of(ObjectType::Speaker), 3);

        // Two ambients share the wind loop
        assert_eq!(scene.sounds.len(), 2);

        assert!(scene.find_object("props_c17/oildrum001.mdl:2").is_some());
        assert!(scene.find_object("door_frame.vmf").is_some());
    }
}
