//! The command catalog.
//!
//! [`Catalog`] holds the sanitized workspace and output names and emits the
//! command lines block by block into a [`CommandSink`].  Blocks always come
//! out in [`Section`] order: workspace, layout, split, move, focus.
//!
//! Each block is also exposed as a free function (`write_*_commands`) for
//! callers that want to compose their own catalog.

use crate::command::{
    OutputInfo, Section, FOCUS_OUTPUT_DIRECTIONS, FOCUS_TARGETS, LAYOUT_PARAMS,
    MOVE_DIRECTIONS, SPLIT_PARAMS,
};
use crate::config::Config;
use crate::sanitize::{sanitize_with, QuoteStyle};
use crate::traits::{CommandSink, WindowManager};
use log::{debug, info};

/// Possible errors while building or emitting a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The window manager could not be queried.  Nothing has been emitted.
    #[error("window manager unavailable: {0}")]
    Unavailable(String),
    /// The sink rejected a line.  Lines before it have been emitted.
    #[error("failed to write command: {0}")]
    Sink(String),
}

/// A ready-to-emit catalog of window-manager commands.
///
/// # Typical usage
///
/// ```ignore
/// let catalog = Catalog::from_window_manager(&I3Wm::new(), &config)?;
/// catalog.write_to(&mut WriterSink::new(std::io::stdout().lock()))?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    workspaces: Vec<String>,
    outputs: Vec<String>,
    sections: Vec<Section>,
}

impl Catalog {
    /// Build a catalog covering every section, quoting names with
    /// [`QuoteStyle::Plain`].
    pub fn new<W, O>(workspaces: W, outputs: O) -> Self
    where
        W: IntoIterator,
        W::Item: AsRef<str>,
        O: IntoIterator,
        O::Item: AsRef<str>,
    {
        Self::with_quote_style(workspaces, outputs, QuoteStyle::Plain)
    }

    /// Like [`new`](Self::new), with an explicit quote style.
    pub fn with_quote_style<W, O>(workspaces: W, outputs: O, style: QuoteStyle) -> Self
    where
        W: IntoIterator,
        W::Item: AsRef<str>,
        O: IntoIterator,
        O::Item: AsRef<str>,
    {
        let workspaces = workspaces
            .into_iter()
            .map(|name| sanitize_with(name.as_ref(), style).into_owned())
            .collect();
        let outputs = outputs
            .into_iter()
            .map(|name| sanitize_with(name.as_ref(), style).into_owned())
            .collect();
        Self {
            workspaces,
            outputs,
            sections: Section::ALL.to_vec(),
        }
    }

    /// Query `wm` and build a catalog according to `config`.
    ///
    /// Both queries complete before anything is returned, so a failing
    /// window manager never leads to a partial catalog.
    pub fn from_window_manager<M: WindowManager>(
        wm: &M,
        config: &Config,
    ) -> Result<Self, CatalogError> {
        let workspaces = wm
            .workspaces()
            .map_err(|e| CatalogError::Unavailable(e.to_string()))?;
        let outputs = wm
            .outputs()
            .map_err(|e| CatalogError::Unavailable(e.to_string()))?;
        info!(
            "found {} workspace(s) and {} output(s)",
            workspaces.len(),
            outputs.len()
        );

        let outputs: Vec<OutputInfo> = if config.skip_inactive_outputs {
            outputs
                .into_iter()
                .filter(|o| {
                    if !o.active {
                        debug!("skipping inactive output {}", o.name);
                    }
                    o.active
                })
                .collect()
        } else {
            outputs
        };

        let catalog = Self::with_quote_style(
            workspaces.iter().map(|w| w.name.as_str()),
            outputs.iter().map(|o| o.name.as_str()),
            config.quote_style,
        );
        Ok(catalog.with_sections(config.sections.iter().copied()))
    }

    /// Restrict the catalog to `sections`.
    ///
    /// Duplicates are ignored and the emission order stays canonical no
    /// matter how `sections` is ordered.
    pub fn with_sections(mut self, sections: impl IntoIterator<Item = Section>) -> Self {
        let mut sections: Vec<Section> = sections.into_iter().collect();
        sections.sort();
        sections.dedup();
        self.sections = sections;
        self
    }

    /// The sections this catalog emits, in emission order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Sanitized workspace names.
    pub fn workspaces(&self) -> &[String] {
        &self.workspaces
    }

    /// Sanitized output names.
    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    /// Number of lines [`write_to`](Self::write_to) emits.
    pub fn len(&self) -> usize {
        let w = self.workspaces.len();
        let o = self.outputs.len();
        self.sections
            .iter()
            .map(|s| match s {
                Section::Workspace => 3 * w + o + MOVE_DIRECTIONS.len(),
                Section::Layout => LAYOUT_PARAMS.len(),
                Section::Split => SPLIT_PARAMS.len(),
                Section::Move => MOVE_DIRECTIONS.len(),
                Section::Focus => {
                    MOVE_DIRECTIONS.len() + FOCUS_TARGETS.len() + FOCUS_OUTPUT_DIRECTIONS.len() + o
                }
            })
            .sum()
    }

    /// Whether the catalog emits nothing at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Emit every selected block into `sink`.
    pub fn write_to<S: CommandSink>(&self, sink: &mut S) -> Result<(), CatalogError> {
        self.emit_all(sink)
            .map_err(|e| CatalogError::Sink(e.to_string()))
    }

    /// Collect the catalog into a list of lines (without terminators).
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = Vec::with_capacity(self.len());
        if let Err(never) = self.emit_all(&mut lines) {
            match never {}
        }
        lines
    }

    fn emit_all<S: CommandSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        for section in &self.sections {
            debug!("emitting {} block", section);
            match section {
                Section::Workspace => {
                    write_workspace_commands(sink, &self.workspaces, &self.outputs)?
                }
                Section::Layout => write_layout_commands(sink)?,
                Section::Split => write_split_commands(sink)?,
                Section::Move => write_move_commands(sink)?,
                Section::Focus => write_focus_commands(sink, &self.outputs)?,
            }
        }
        Ok(())
    }
}

/// Generate the full catalog for raw (unsanitized) names.
pub fn generate<W, O>(workspaces: W, outputs: O) -> Vec<String>
where
    W: IntoIterator,
    W::Item: AsRef<str>,
    O: IntoIterator,
    O::Item: AsRef<str>,
{
    Catalog::new(workspaces, outputs).lines()
}

//  Blocks
//
// The functions below take names that are already sanitized.

/// Workspace block: renames, container moves, jumps, then workspace moves
/// to each output and to each direction.
///
/// The rename target is deliberately left empty (`rename workspace 1 to `)
/// for the user to fill in.
pub fn write_workspace_commands<S: CommandSink>(
    sink: &mut S,
    workspaces: &[String],
    outputs: &[String],
) -> Result<(), S::Error> {
    for ws in workspaces {
        sink.emit(&format!("rename workspace {} to ", ws))?;
    }
    for ws in workspaces {
        sink.emit(&format!("move container to workspace {}", ws))?;
    }
    for ws in workspaces {
        sink.emit(&format!("workspace {}", ws))?;
    }
    for output in outputs {
        sink.emit(&format!("move workspace to output {}", output))?;
    }
    for dir in MOVE_DIRECTIONS {
        sink.emit(&format!("move workspace to output {}", dir))?;
    }
    Ok(())
}

pub fn write_layout_commands<S: CommandSink>(sink: &mut S) -> Result<(), S::Error> {
    for param in LAYOUT_PARAMS {
        sink.emit(&format!("layout {}", param))?;
    }
    Ok(())
}

pub fn write_split_commands<S: CommandSink>(sink: &mut S) -> Result<(), S::Error> {
    for param in SPLIT_PARAMS {
        sink.emit(&format!("split {}", param))?;
    }
    Ok(())
}

/// `move <direction>` for the focused container.
pub fn write_move_commands<S: CommandSink>(sink: &mut S) -> Result<(), S::Error> {
    for dir in MOVE_DIRECTIONS {
        sink.emit(&format!("move {}", dir))?;
    }
    Ok(())
}

/// Focus block: simple focus targets, then `focus output` for the four
/// directions followed by every output name.
pub fn write_focus_commands<S: CommandSink>(
    sink: &mut S,
    outputs: &[String],
) -> Result<(), S::Error> {
    for dir in MOVE_DIRECTIONS {
        sink.emit(&format!("focus {}", dir))?;
    }
    for target in FOCUS_TARGETS {
        sink.emit(&format!("focus {}", target))?;
    }
    for dir in FOCUS_OUTPUT_DIRECTIONS {
        sink.emit(&format!("focus output {}", dir))?;
    }
    for output in outputs {
        sink.emit(&format!("focus output {}", output))?;
    }
    Ok(())
}

//  Tests
