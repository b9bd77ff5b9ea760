//! Results
//!
//! - **grade**: Grade tiers, colors, emojis and the celebration rule
//! - **view**: The derived results page model
//! - **flow**: Lookup by route id and the page state
//! - **celebration**: Once-per-view celebratory cue
//!
//! # Example
//!
//! ```rust
//! use eagle_results::dataset::{Dataset, ExamDescriptor, Student};
//! use eagle_results::results::{ResultsState, GradeTier};
//! use eagle_results::router::RouteStudentId;
//!
//! let dataset = Dataset::new(
//!     ExamDescriptor {
//!         title: "Final".to_string(),
//!         total_marks: 100.0,
//!         pass_percentage: 50.0,
//!         model_answer_url: "/model.pdf".to_string(),
//!         notes: vec![],
//!     },
//!     vec![Student::new(7, "Lina Samir", "p1", 92.0, 92.0, "A+")],
//! );
//!
//! let state = ResultsState::resolve(Ok(&dataset), RouteStudentId::parse("7"));
//! let view = state.view().unwrap();
//! assert_eq!(view.score_label, "92/100");
//! assert_eq!(view.tier(), GradeTier::APlus);
//! assert!(view.celebrate);
//! ```

pub mod celebration;
pub mod flow;
pub mod grade;
pub mod view;

pub use celebration::{
    CelebrationCue, CelebrationLatch, CueError, SilentCue, CELEBRATION_AUDIO_PATH,
};
pub use flow::{
    resolve_results, LookupError, ResultsError, ResultsState, NOT_FOUND_MESSAGE,
    RESULTS_LOAD_ERROR_MESSAGE,
};
pub use grade::{celebrates, GradeTier};
pub use view::{
    downloads_for, Download, DownloadKind, GradeBadge, ResultsView, ScoreRing, RING_TRACK_COLOR,
};
