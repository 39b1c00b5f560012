//! User-invocable commands.
//!
//! Two operators are exposed to the editor:
//!
//! - [`ImportYavcEntities`]: File > Import > "Import YAVC Entities"
//! - [`UseInstance`]: "Use Instance" button of the mass instancing panel
//!
//! Each reports a [`OperatorStatus`] plus user-visible messages, the way
//! editor operators do. Registration and UI drawing belong to the host.

use std::path::PathBuf;

use crate::instancing::transfer_collection;
use crate::scene::Scene;
use crate::sink::{ObjectId, SceneSink};
use crate::yavc::{import_yavc, ImportOptions, ImportResult};

/// Final state of an operator run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperatorStatus {
    Finished,
    Cancelled,
}

/// Severity of a report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportLevel {
    Info,
    Error,
}

/// A message shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub level: ReportLevel,
    pub message: String,
}

/// Status and reports of one operator run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperatorOutcome {
    pub status: OperatorStatus,
    pub reports: Vec<Report>,
}

impl OperatorOutcome {
    fn finished(message: impl Into<String>) -> Self {
        Self {
            status: OperatorStatus::Finished,
            reports: vec![Report {
                level: ReportLevel::Info,
                message: message.into(),
            }],
        }
    }

    fn cancelled(message: impl Into<String>) -> Self {
        Self {
            status: OperatorStatus::Cancelled,
            reports: vec![Report {
                level: ReportLevel::Error,
                message: message.into(),
            }],
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status == OperatorStatus::Finished
    }
}

/// Editor state an operator runs against.
pub struct OperatorContext<'a> {
    pub scene: &'a mut Scene,

    /// Active object
    pub active: Option<ObjectId>,

    /// Selected objects
    pub selected: Vec<ObjectId>,
}

/// Import a `.yavc` scene file into the active scene.
#[derive(Clone, Debug, Default)]
pub struct ImportYavcEntities {
    /// File chosen in the file picker
    pub filepath: PathBuf,

    pub options: ImportOptions,
}

impl ImportYavcEntities {
    pub const IDNAME: &'static str = "import_yavc.entities";
    pub const LABEL: &'static str = "Import YAVC Entities as Empties";
    pub const MENU_TEXT: &'static str = "Import YAVC Entities";
    pub const FILENAME_EXT: &'static str = ".yavc";
    pub const FILTER_GLOB: &'static str = "*.yavc";

    pub fn new(filepath: impl Into<PathBuf>) -> Self {
        Self {
            filepath: filepath.into(),
            options: ImportOptions::default(),
        }
    }

    /// Run the import. Input failures are propagated, not reported.
    pub fn execute<S: SceneSink + ?Sized>(&self, sink: &mut S) -> ImportResult<OperatorOutcome> {
        let summary = import_yavc(&self.filepath, sink, &self.options)?;
        Ok(OperatorOutcome::finished(format!(
            "Imported {} object(s)",
            summary.total()
        )))
    }
}

/// Copy the active object's instanced collection to all selected empties.
#[derive(Clone, Copy, Debug, Default)]
pub struct UseInstance;

impl UseInstance {
    pub const IDNAME: &'static str = "mass_instancing.operator";
    pub const LABEL: &'static str = "Use Instance";
    pub const DESCRIPTION: &'static str = "Apply instancing to all selected objects";

    /// Whether the operator can run at all.
    pub fn poll(context: &OperatorContext<'_>) -> bool {
        context.active.is_some()
    }

    pub fn invoke(&self, context: &mut OperatorContext<'_>) -> OperatorOutcome {
        let Some(source) = context.active else {
            return OperatorOutcome::cancelled("No active object");
        };

        match transfer_collection(context.scene, source, &context.selected) {
            Ok(n) => OperatorOutcome::finished(format!("Transferred collection to {} instance(s)", n)),
            Err(e) => {
                log::warn!("{}: {}", Self::LABEL, e);
                OperatorOutcome::cancelled(e.to_string())
            }
        }
    }
}
