//! Declarative report content, kept apart from the layout engine.

use crate::builder::LayoutConfig;
use crate::layout::Block;
use crate::PDFError;

/// The body of a section
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Paragraph(String),
    Bullets(Vec<String>),
}

/// A titled section of the report
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: String,
    pub body: Body,
}

impl Section {
    pub fn paragraph<T: Into<String>, S: Into<String>>(title: T, text: S) -> Section {
        Section {
            title: title.into(),
            body: Body::Paragraph(text.into()),
        }
    }

    pub fn bullets<T, I, S>(title: T, items: I) -> Section
    where
        T: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Section {
            title: title.into(),
            body: Body::Bullets(items.into_iter().map(Into::into).collect()),
        }
    }
}

/// A one-page summary: a headline, a short note on where the content came from, and
/// the titled sections in reading order
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub headline: String,
    pub source_note: String,
    pub sections: Vec<Section>,
}

impl Report {
    /// Flatten the report into blocks styled by `config`. Sections are separated by a
    /// fixed gap; there is no gap after the last one.
    pub fn blocks(&self, config: &LayoutConfig) -> Result<Vec<Block>, PDFError> {
        let theme = &config.theme;
        let mut blocks = vec![
            Block::line(
                self.headline.as_str(),
                theme.title_font,
                config.headline_size,
                config.headline_advance,
            )?,
            Block::line(
                self.source_note.as_str(),
                theme.body_font,
                config.note_size,
                config.note_advance,
            )?,
        ];

        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                blocks.push(Block::spacer(config.section_gap)?);
            }
            blocks.push(Block::title(section.title.as_str()));
            blocks.push(match &section.body {
                Body::Paragraph(text) => {
                    Block::paragraph(text.as_str(), config.body_size, config.body_leading)?
                }
                Body::Bullets(items) => Block::bullet_list(
                    items.iter().map(String::as_str),
                    config.body_size,
                    config.body_leading,
                )?,
            });
        }

        Ok(blocks)
    }
}

/// The WalkTracker one-page app summary
pub fn walktracker() -> Report {
    Report {
        headline: "WalkTracker - One-Page App Summary".into(),
        source_note: "Source basis: README, AndroidManifest, app/build.gradle, and Kotlin source files in this repo.".into(),
        sections: vec![
            Section::paragraph(
                "What It Is",
                "WalkTracker is a Kotlin/Jetpack Compose Android app for tracking walking sessions with GPS, \
                 distance, and step counts on-device. It uses a foreground location service for live tracking and \
                 stores session history locally with Room and user settings with DataStore.",
            ),
            Section::paragraph(
                "Who It Is For",
                "Primary persona: people who want a simple, privacy-focused walking tracker that works offline. \
                 Formal persona definition document: Not found in repo.",
            ),
            Section::bullets(
                "What It Does",
                [
                    "Starts, pauses, resumes, and stops walk sessions from the home screen UI.",
                    "Tracks distance via a foreground GPS service with accuracy, age, and movement filtering.",
                    "Counts steps using device step sensor when available, with distance-based fallback.",
                    "Saves completed sessions (distance, duration, steps) to local Room database history.",
                    "Stores preferences in DataStore (units, step length, step-sensor toggle, maps toggle).",
                    "Provides a step-length calibration screen based on known distance and step count.",
                    "Supports optional Google Maps-based path display; current session/history path loading is currently stubbed to empty in MainActivity.",
                ],
            ),
            Section::bullets(
                "How It Works (Repo-Evidenced Architecture)",
                [
                    "UI layer: MainActivity + Compose screens (Home, Settings, Calibration, Map) and navigation.",
                    "State layer: MainViewModel coordinates UI state, service binding, Room DAOs, and DataStore preferences.",
                    "Tracking layer: LocationService uses FusedLocationProviderClient and exposes distance/path state flows.",
                    "Data layer: AppDb (Room) with WalkSession/WalkPath entities and WalkDao/WalkPathDao for persistence.",
                    "Data flow: User action -> ViewModel -> LocationService + StepCounter -> UI state updates -> session/path persisted on stop.",
                    "External services found in code: Google Play Services Location and optional Google Maps SDK.",
                    "Cloud backend/API service implementation: Not found in repo.",
                ],
            ),
            Section::bullets(
                "How To Run (Minimal)",
                [
                    "Prereqs: Android Studio, Android SDK 26+, Java 17, and Google Play Services.",
                    "Open this project in Android Studio and sync Gradle.",
                    "Optional maps: set google_maps_key in app/src/main/res/values/strings.xml.",
                    "Run on device/emulator and grant location permissions; CLI build option: ./gradlew assembleDebug.",
                ],
            ),
        ],
    }
}
