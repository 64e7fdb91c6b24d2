use std::path::{ Path, PathBuf };

use log::{ debug, info };

use crate::errors::DocsResult;
use crate::implementations::write_output;
use crate::models::diagram::{ DiagramTarget, ImageFormat };
use crate::traits::diagram_renderer::DiagramRenderer;

/// Layered architecture of the planned reader app, as a Mermaid flowchart
pub const ARCHITECTURE_DIAGRAM: &str = r#"
flowchart TD
    %% UI Layer - arranged horizontally
    subgraph UI["🎨 UI Layer (Jetpack Compose)"]
        direction LR
        RS[Reading Screen]
        LS[Library Screen]
        AU[Authentication]
        SE[Settings]
        CP[Character Profiles]
        TV[Timeline View]
    end
    
    %% Domain Layer - arranged horizontally
    subgraph DL["⚙️ Domain Layer (Business Logic)"]
        direction LR
        RUC[Reading Use Cases]
        AUC[Auth Use Cases]
        CUC[Content Use Cases]
        SUC[Sync Use Cases]
    end
    
    %% Data Layer - arranged horizontally
    subgraph DAL["📊 Data Layer"]
        direction LR
        RP[Repository Pattern]
        AC[API Client]
        LDB[Local Database]
        FM[File Manager]
    end
    
    %% External Services - arranged horizontally
    subgraph ES["🌐 External Services"]
        direction LR
        ZA[Zoroastervers API]
        SP[Stripe Payments]
        FS[File Storage]
    end
    
    %% Local Storage - arranged horizontally
    subgraph LS_LOCAL["💾 Local Storage"]
        direction LR
        RD[Room Database]
        DC[Downloaded Content]
        UP[User Preferences]
        RPG[Reading Progress]
    end
    
    %% Background Services - arranged horizontally
    subgraph BS["🔄 Background Services"]
        direction LR
        WM[WorkManager]
        SS[Sync Service]
        DM[Download Manager]
        NO[Notifications]
    end
    
    %% Main data flow - simplified connections
    UI --> DL
    DL --> DAL
    DAL --> ES
    DAL --> LS_LOCAL
    
    %% Background services connections
    BS --> DAL
    BS --> LS_LOCAL
    
    %% Key specific connections (reduced for clarity)
    RS -.-> RUC
    AU -.-> AUC
    LS -.-> CUC
    
    RP --> AC
    RP --> LDB
    AC --> ZA
    LDB --> RD
    FM --> DC
    
    WM --> SS
    WM --> DM
    SS -.-> ZA
    DM -.-> FS
    
    %% Add some spacing
    UI ~~~ DL
    DL ~~~ DAL
    DAL ~~~ ES
    DAL ~~~ LS_LOCAL
    LS_LOCAL ~~~ BS
"#;

pub fn architecture_diagram() -> &'static str {
    ARCHITECTURE_DIAGRAM
}

/// Render the architecture diagram to PNG and SVG and write both files.
///
/// Returns the PNG and SVG paths as written.
pub async fn render_architecture(
    renderer: &dyn DiagramRenderer,
    target: &DiagramTarget
) -> DocsResult<(PathBuf, PathBuf)> {
    render_diagram(renderer, ARCHITECTURE_DIAGRAM, target).await
}

/// Render any diagram description to the two files named by `target`
pub async fn render_diagram(
    renderer: &dyn DiagramRenderer,
    source: &str,
    target: &DiagramTarget
) -> DocsResult<(PathBuf, PathBuf)> {
    info!(
        "Rendering diagram with {} at {}x{}",
        renderer.name(),
        target.width,
        target.height
    );

    for (format, path) in [(ImageFormat::Png, &target.png), (ImageFormat::Svg, &target.svg)] {
        let bytes = renderer.render(source, format, target.width, target.height).await?;
        write_output(path, &bytes)?;
        debug!("Wrote {} ({} bytes)", path.display(), bytes.len());
    }

    Ok((target.png.clone(), target.svg.clone()))
}

/// Write the raw diagram text, for editing or rendering elsewhere
pub fn write_source(path: &Path) -> DocsResult<()> {
    write_output(path, ARCHITECTURE_DIAGRAM.as_bytes())?;
    info!("Diagram source saved to {}", path.display());
    Ok(())
}
