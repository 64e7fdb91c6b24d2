use std::path::Path;

use log::info;

use crate::errors::DocsResult;
use crate::implementations::write_output;
use crate::models::tech_spec::{
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

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The technical specification sheet for the Zoroastervers Android e-book reader
pub fn tech_specs() -> TechSpec {
    TechSpec {
        project_info: ProjectInfo {
            name: "Zoroastervers Android E-book Reader".to_string(),
            version: "1.0.0".to_string(),
            target_android_version: "API 24+ (Android 7.0+)".to_string(),
            development_approach: "Native Android with Kotlin".to_string(),
            architecture: "Clean Architecture with MVVM".to_string(),
        },

        core_features: strings(
            &[
                "Chapter-based reading with progress tracking",
                "Offline reading with content sync",
                "Subscription-based access control",
                "Character profiles and world-building content",
                "Timeline integration for historical context",
                "Bookmarks and reading notes",
                "Cross-device progress synchronization",
                "Dark/light theme support",
                "Adjustable reading settings",
                "Search functionality",
            ]
        ),

        technology_stack: TechnologyStack {
            language: "Kotlin".to_string(),
            ui_framework: "Jetpack Compose".to_string(),
            architecture_components: strings(
                &[
                    "Room Database",
                    "ViewModel",
                    "LiveData/StateFlow",
                    "Navigation Component",
                    "WorkManager",
                    "DataStore",
                ]
            ),
            networking: strings(&["Retrofit", "OkHttp", "Gson"]),
            dependency_injection: "Hilt".to_string(),
            async_programming: "Kotlin Coroutines".to_string(),
            testing: strings(&["JUnit", "Espresso", "MockK"]),
        },

        data_architecture: DataArchitecture {
            local_storage: LocalStorage {
                room_database: RoomDatabase {
                    entities: strings(
                        &[
                            "Chapter",
                            "ReadingProgress",
                            "User",
                            "Subscription",
                            "Character",
                            "TimelineEvent",
                            "Bookmark",
                            "Note",
                        ]
                    ),
                    daos: strings(
                        &[
                            "ChapterDao",
                            "ReadingProgressDao",
                            "UserDao",
                            "SubscriptionDao",
                            "CharacterDao",
                            "TimelineDao",
                        ]
                    ),
                },
                file_storage: "Downloaded chapter content, images, cached data".to_string(),
                preferences: "User settings, app configuration".to_string(),
            },
            remote_integration: RemoteIntegration {
                base_url: "https://backend-url/api".to_string(),
                endpoints: strings(
                    &[
                        "/auth/signin",
                        "/auth/signup",
                        "/auth/refresh",
                        "/chapters/{issue_slug}/{chapter_identifier}",
                        "/subscription/status",
                        "/characters/{slug}",
                        "/timeline/events",
                        "/reading-progress",
                    ]
                ),
            },
        },

        ui_structure: UiStructure {
            screens: strings(
                &[
                    "SplashScreen",
                    "LoginScreen",
                    "LibraryScreen",
                    "ReaderScreen",
                    "CharacterScreen",
                    "TimelineScreen",
                    "SettingsScreen",
                    "SubscriptionScreen",
                ]
            ),
            navigation: "Single Activity with Compose Navigation".to_string(),
            theming: "Material Design 3 with custom Zoroastervers branding".to_string(),
        },

        offline_capabilities: OfflineCapabilities {
            content_caching: "Download chapters for offline reading".to_string(),
            progress_sync: "Queue reading progress for sync when online".to_string(),
            conflict_resolution: "Timestamp-based merge strategy".to_string(),
            background_sync: "WorkManager periodic sync every 15 minutes".to_string(),
        },
    }
}

/// Serialize with two-space indentation and no trailing newline; non-ASCII is kept as-is
pub fn to_json_string(spec: &TechSpec) -> DocsResult<String> {
    Ok(serde_json::to_string_pretty(spec)?)
}

pub fn write_spec_json(spec: &TechSpec, path: &Path) -> DocsResult<()> {
    let json = to_json_string(spec)?;
    write_output(path, json.as_bytes())?;
    info!("Wrote {} bytes of specification JSON to {}", json.len(), path.display());
    Ok(())
}
