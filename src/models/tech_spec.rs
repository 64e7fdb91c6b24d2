use serde::{ Deserialize, Serialize };

/// Technical specification sheet for the planned reader app.
///
/// Field order is the order keys appear in the serialized JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechSpec {
    pub project_info: ProjectInfo,
    pub core_features: Vec<String>,
    pub technology_stack: TechnologyStack,
    pub data_architecture: DataArchitecture,
    pub ui_structure: UiStructure,
    pub offline_capabilities: OfflineCapabilities,
}

impl TechSpec {
    /// Top-level JSON keys, in serialization order
    pub const SECTION_KEYS: [&'static str; 6] = [
        "project_info",
        "core_features",
        "technology_stack",
        "data_architecture",
        "ui_structure",
        "offline_capabilities",
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub name: String,
    pub version: String,
    pub target_android_version: String,
    pub development_approach: String,
    pub architecture: String,
}

impl ProjectInfo {
    /// Key/value pairs in authored order
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("name", self.name.as_str()),
            ("version", self.version.as_str()),
            ("target_android_version", self.target_android_version.as_str()),
            ("development_approach", self.development_approach.as_str()),
            ("architecture", self.architecture.as_str()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnologyStack {
    pub language: String,
    pub ui_framework: String,
    pub architecture_components: Vec<String>,
    pub networking: Vec<String>,
    pub dependency_injection: String,
    pub async_programming: String,
    pub testing: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataArchitecture {
    pub local_storage: LocalStorage,
    pub remote_integration: RemoteIntegration,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalStorage {
    pub room_database: RoomDatabase,
    pub file_storage: String,
    pub preferences: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDatabase {
    pub entities: Vec<String>,
    pub daos: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteIntegration {
    pub base_url: String,
    pub endpoints: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiStructure {
    pub screens: Vec<String>,
    pub navigation: String,
    pub theming: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfflineCapabilities {
    pub content_caching: String,
    pub progress_sync: String,
    pub conflict_resolution: String,
    pub background_sync: String,
}

impl OfflineCapabilities {
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("content_caching", self.content_caching.as_str()),
            ("progress_sync", self.progress_sync.as_str()),
            ("conflict_resolution", self.conflict_resolution.as_str()),
            ("background_sync", self.background_sync.as_str()),
        ]
    }
}
