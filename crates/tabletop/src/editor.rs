//! Selection and edit controller.
//!
//! The editor owns the fill registry, the shape store and the selection
//! state. All user intent goes through here:
//!
//! ```text
//!   NoSelection ──select_shape(i)──▶ ShapeSelected(i) ──select_shape(j)──▶ ShapeSelected(j)
//!        ▲                                  │
//!        └───────────── reset() ◀───────────┘
//! ```
//!
//! Applying or rotating with nothing selected is a logged no-op.

use std::path::Path;
use std::rc::Rc;

use rand::Rng;

use crate::color::Color;
use crate::config::EditorConfig;
use crate::error::{Error, Result};
use crate::export::{self, ExportError, ExportFormat, ExportOptions};
use crate::fill::{Fill, FillKey};
use crate::patterns::PatternKind;
use crate::registry::FillRegistry;
use crate::rotation::Rotation;
use crate::scene::ShapeStore;

/// Which shape, if any, edits go to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    NoSelection,
    ShapeSelected(usize),
}

impl Selection {
    pub fn index(self) -> Option<usize> {
        match self {
            Selection::NoSelection => None,
            Selection::ShapeSelected(i) => Some(i),
        }
    }
}

/// Selection plus the choices that the next apply will use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorState {
    pub selection: Selection,
    pub pending: FillKey,
}

/// Notifications for whoever draws the scene.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    SelectionChanged(Selection),
    ShapeFilled { index: usize, fill: Rc<Fill> },
    SceneReset,
    SceneRandomized,
}

/// Receives [`EditorEvent`]s.
///
/// Any `FnMut(&EditorEvent)` closure is an observer.
pub trait EditorObserver {
    fn notify(&mut self, event: &EditorEvent);
}

impl<F: FnMut(&EditorEvent)> EditorObserver for F {
    fn notify(&mut self, event: &EditorEvent) {
        self(event)
    }
}

/// The editor session.
pub struct Editor {
    config: EditorConfig,
    registry: FillRegistry,
    store: ShapeStore,
    state: EditorState,
    observer: Option<Box<dyn EditorObserver>>,
}

impl std::fmt::Debug for Editor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("state", &self.state)
            .field("shapes", &self.store.len())
            .field("fills", &self.registry.len())
            .finish()
    }
}

impl Editor {
    /// Build the scene described by `config`.
    pub fn new(config: EditorConfig) -> Result<Self> {
        let mut registry = FillRegistry::new();
        let store = ShapeStore::create(config.layout.clone(), config.default_foreground, &mut registry)?;
        let state = EditorState {
            selection: Selection::NoSelection,
            pending: Self::default_pending(&config),
        };
        Ok(Self { config, registry, store, state, observer: None })
    }

    fn default_pending(config: &EditorConfig) -> FillKey {
        FillKey::solid(config.default_background, config.default_foreground)
    }

    /// Register the observer, replacing any previous one.
    pub fn set_observer(&mut self, observer: impl EditorObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    fn emit(&mut self, event: EditorEvent) {
        if let Some(observer) = self.observer.as_mut() {
            observer.notify(&event);
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn registry(&self) -> &FillRegistry {
        &self.registry
    }

    pub fn store(&self) -> &ShapeStore {
        &self.store
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn selection(&self) -> Selection {
        self.state.selection
    }

    pub fn pending(&self) -> FillKey {
        self.state.pending
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Select shape `index` and copy its assignment into the pending choices.
    pub fn select_shape(&mut self, index: usize) -> Result<()> {
        let assignment = self.store.get(index)?.assignment();
        self.state = EditorState {
            selection: Selection::ShapeSelected(index),
            pending: assignment,
        };
        self.emit(EditorEvent::SelectionChanged(self.state.selection));
        Ok(())
    }

    /// Replace all pending choices at once.
    pub fn set_pending(&mut self, key: FillKey) {
        self.state.pending = key;
    }

    pub fn set_pending_background(&mut self, color: Color) {
        self.state.pending.background = color;
    }

    pub fn set_pending_foreground(&mut self, color: Color) {
        self.state.pending.foreground = color;
    }

    pub fn set_pending_pattern(&mut self, pattern: PatternKind) {
        self.state.pending.pattern = pattern;
    }

    pub fn set_pending_rotation(&mut self, rotation: Rotation) {
        self.state.pending.rotation = rotation;
    }

    // ========================================================================
    // Editing
    // ========================================================================

    /// Apply the pending choices to the selected shape.
    ///
    /// Returns `Ok(None)` when nothing is selected.
    pub fn apply_pending(&mut self) -> Result<Option<Rc<Fill>>> {
        let Selection::ShapeSelected(index) = self.state.selection else {
            log::debug!("apply ignored: no shape selected");
            return Ok(None);
        };

        let fill = self.store.apply_fill(index, self.state.pending, &mut self.registry)?;
        self.emit(EditorEvent::ShapeFilled { index, fill: Rc::clone(&fill) });
        Ok(Some(fill))
    }

    /// Advance the selected shape's rotation by 45° and apply.
    pub fn rotate(&mut self) -> Result<Option<Rc<Fill>>> {
        if self.state.selection == Selection::NoSelection {
            log::debug!("rotate ignored: no shape selected");
            return Ok(None);
        }
        self.state.pending.rotation = self.state.pending.rotation.next();
        self.apply_pending()
    }

    /// Palette pick: set the pending background and apply.
    pub fn choose_background(&mut self, color: Color) -> Result<Option<Rc<Fill>>> {
        self.set_pending_background(color);
        self.apply_pending()
    }

    /// Palette pick: set the pending foreground and apply.
    pub fn choose_foreground(&mut self, color: Color) -> Result<Option<Rc<Fill>>> {
        self.set_pending_foreground(color);
        self.apply_pending()
    }

    /// Palette pick: set the pending pattern and apply.
    pub fn choose_pattern(&mut self, pattern: PatternKind) -> Result<Option<Rc<Fill>>> {
        self.set_pending_pattern(pattern);
        self.apply_pending()
    }

    /// Put every shape back to its baseline and clear the selection.
    ///
    /// Fills already in the registry stay cached.
    pub fn reset(&mut self) -> Result<()> {
        self.store.reset(&mut self.registry)?;
        self.state = EditorState {
            selection: Selection::NoSelection,
            pending: Self::default_pending(&self.config),
        };
        self.emit(EditorEvent::SceneReset);
        Ok(())
    }

    /// Give every shape a random assignment drawn from the palette.
    pub fn randomize_all<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        let palette = &self.config.palette;
        if palette.colors.is_empty() || palette.patterns.is_empty() {
            return Err(Error::EmptyPalette);
        }

        let keys: Vec<FillKey> = (0..self.store.len())
            .map(|_| {
                let background = palette.colors[rng.random_range(0..palette.colors.len())];
                let foreground = palette.colors[rng.random_range(0..palette.colors.len())];
                let pattern = palette.patterns[rng.random_range(0..palette.patterns.len())];
                let steps = rng.random_range(0..Rotation::STEPS);
                let rotation = (0..steps).fold(Rotation::ZERO, |r, _| r.next());
                FillKey::new(pattern, background, foreground, rotation)
            })
            .collect();

        for (index, key) in keys.into_iter().enumerate() {
            self.store.apply_fill(index, key, &mut self.registry)?;
        }
        log::info!("randomized {} shapes", self.store.len());
        self.emit(EditorEvent::SceneRandomized);

        if self.config.select_first_after_randomize && !self.store.is_empty() {
            self.select_shape(0)?;
        }
        Ok(())
    }

    // ========================================================================
    // Export
    // ========================================================================

    /// Serialize the scene with the configured raster scale.
    pub fn export(&self, format: ExportFormat) -> std::result::Result<Vec<u8>, ExportError> {
        let options = ExportOptions { scale: self.config.raster_scale, highlight: None };
        self.export_with(format, &options)
    }

    pub fn export_with(
        &self,
        format: ExportFormat,
        options: &ExportOptions,
    ) -> std::result::Result<Vec<u8>, ExportError> {
        let bytes = export::export(&self.store, &self.registry, format, options)?;
        log::info!("exported {} ({} bytes)", format, bytes.len());
        Ok(bytes)
    }

    /// Write the scene to `path`; the extension picks SVG or PNG.
    pub fn save(&self, path: &Path) -> std::result::Result<ExportFormat, ExportError> {
        let options = ExportOptions { scale: self.config.raster_scale, highlight: None };
        export::save(&self.store, &self.registry, path, &options)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn editor() -> Editor {
        Editor::new(EditorConfig::tabletop()).unwrap()
    }

    #[test]
    fn starts_with_no_selection_and_defaults() {
        let editor = editor();
        assert_eq!(editor.selection(), Selection::NoSelection);
        assert_eq!(editor.pending().pattern, PatternKind::Solid);
        assert_eq!(editor.pending().background, editor.config().default_background);
    }

    #[test]
    fn selecting_copies_assignment_to_pending() {
        let mut editor = editor();
        editor.select_shape(5).unwrap();
        assert_eq!(editor.selection(), Selection::ShapeSelected(5));
        assert_eq!(editor.pending(), editor.store().get(5).unwrap().assignment());
    }

    #[test]
    fn selecting_out_of_range_keeps_state() {
        let mut editor = editor();
        editor.select_shape(2).unwrap();
        let before = editor.state();
        assert_eq!(editor.select_shape(99), Err(Error::IndexOutOfRange { index: 99, len: 14 }));
        assert_eq!(editor.state(), before);
    }

    #[test]
    fn apply_without_selection_is_a_no_op() {
        let mut editor = editor();
        let fills = editor.registry().len();
        editor.set_pending_pattern(PatternKind::Lines);
        assert_eq!(editor.apply_pending(), Ok(None));
        assert_eq!(editor.rotate(), Ok(None));
        assert_eq!(editor.pending().rotation, Rotation::ZERO);
        assert_eq!(editor.registry().len(), fills);
    }

    #[test]
    fn choose_applies_immediately() {
        let mut editor = editor();
        editor.select_shape(1).unwrap();
        let fill = editor.choose_pattern(PatternKind::Grid).unwrap().unwrap();
        let shape = editor.store().get(1).unwrap();
        assert!(Rc::ptr_eq(&fill, shape.fill()));
        assert_eq!(shape.assignment().pattern, PatternKind::Grid);
    }

    #[test]
    fn rotate_builds_a_new_fill_per_step() {
        let mut editor = editor();
        editor.select_shape(0).unwrap();
        editor.choose_pattern(PatternKind::Lines).unwrap();
        let first = editor.rotate().unwrap().unwrap();
        assert_eq!(first.as_pattern().unwrap().id, "lines-bgC5E8A5-fgA59BC6-rot45");
        let second = editor.rotate().unwrap().unwrap();
        assert!(!Rc::ptr_eq(&first, &second));
        assert_eq!(editor.store().get(0).unwrap().assignment().rotation.degrees(), 90);
    }

    #[test]
    fn reset_clears_selection_and_pending() {
        let mut editor = editor();
        editor.select_shape(3).unwrap();
        editor.choose_pattern(PatternKind::Checkerboard).unwrap();
        editor.reset().unwrap();
        assert_eq!(editor.selection(), Selection::NoSelection);
        assert_eq!(editor.pending(), FillKey::solid(
            editor.config().default_background,
            editor.config().default_foreground,
        ));
        assert!(editor.store().iter().all(|s| s.is_at_baseline()));
    }

    #[test]
    fn randomize_uses_palette_and_selects_first() {
        let mut editor = editor();
        let mut rng = StdRng::seed_from_u64(7);
        editor.randomize_all(&mut rng).unwrap();

        let palette = editor.config().palette.clone();
        for shape in editor.store().iter() {
            let key = shape.assignment();
            assert!(palette.colors.contains(&key.background));
            assert!(palette.colors.contains(&key.foreground));
            assert!(palette.patterns.contains(&key.pattern));
        }
        assert_eq!(editor.selection(), Selection::ShapeSelected(0));
    }

    #[test]
    fn randomize_is_reproducible_with_a_seed() {
        let mut a = editor();
        let mut b = editor();
        a.randomize_all(&mut StdRng::seed_from_u64(42)).unwrap();
        b.randomize_all(&mut StdRng::seed_from_u64(42)).unwrap();
        let keys = |e: &Editor| e.store().iter().map(|s| s.assignment()).collect::<Vec<_>>();
        assert_eq!(keys(&a), keys(&b));
    }

    #[test]
    fn randomize_rejects_an_empty_palette() {
        let mut config = EditorConfig::tabletop();
        config.palette.patterns.clear();
        let mut editor = Editor::new(config).unwrap();
        let before = editor.store().get(0).unwrap().assignment();

        let err = editor.randomize_all(&mut StdRng::seed_from_u64(3)).unwrap_err();
        assert_eq!(err, Error::EmptyPalette);
        assert_eq!(editor.store().get(0).unwrap().assignment(), before);
    }

    #[test]
    fn randomize_can_leave_selection_alone() {
        let config = EditorConfig { select_first_after_randomize: false, ..EditorConfig::tabletop() };
        let mut editor = Editor::new(config).unwrap();
        editor.randomize_all(&mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(editor.selection(), Selection::NoSelection);
    }

    #[test]
    fn observer_sees_events_in_order() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);

        let mut editor = editor();
        editor.set_observer(move |event: &EditorEvent| sink.borrow_mut().push(event.clone()));
        editor.select_shape(2).unwrap();
        editor.choose_background(Color::WHITE).unwrap();
        editor.reset().unwrap();

        let events = events.borrow();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0], EditorEvent::SelectionChanged(Selection::ShapeSelected(2)));
        assert!(matches!(events[1], EditorEvent::ShapeFilled { index: 2, .. }));
        assert_eq!(events[2], EditorEvent::SceneReset);
    }
}
