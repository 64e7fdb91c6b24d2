pub mod diagram;
pub mod tech_spec;

// Re-export common model types
pub use diagram::{ DiagramIssue, DiagramReport, DiagramTarget, ImageFormat, IssueSeverity };
pub use tech_spec::{
    DataArchitecture,
    LocalStorage,
    OfflineCapabilities,
    ProjectInfo,
    RemoteIntegration,
    RoomDatabase,
    TechSpec,
    TechnologyStack,
    UiStructure,
};
