//! Interactive attribute selection.
//!
//! Each iteration rebuilds the menu, prints it, and scans one integer.
//! Malformed and out-of-range answers re-prompt without limit; only the
//! end of the input stream stops the loop without a choice.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use super::input::{read_selection, Scan};
use super::menu::Menu;
use crate::cards::AttributeId;
use crate::error::SelectError;
use crate::SEPARATOR;

/// Attribute selector over injected input and output streams.
///
/// ## Example
///
/// ```
/// use std::io::Cursor;
/// use super_trunfo::cards::AttributeId;
/// use super_trunfo::selector::AttributeSelector;
///
/// let mut selector = AttributeSelector::new(Cursor::new("x\n9\n2\n"), Vec::new());
/// let attr = selector.select(None, "Pick one:").unwrap();
///
/// assert_eq!(attr, AttributeId::Area);
/// ```
#[derive(Debug)]
pub struct AttributeSelector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> AttributeSelector<R, W> {
    /// Create a selector reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prompt until the player picks an attribute other than `excluded`.
    pub fn select(
        &mut self,
        excluded: Option<AttributeId>,
        prompt: &str,
    ) -> Result<AttributeId, SelectError> {
        writeln!(self.output, "\n{prompt}")?;
        writeln!(self.output, "{SEPARATOR}")?;

        loop {
            let menu = Menu::build(excluded);
            debug_assert!(!menu.is_empty());
            menu.render(&mut self.output)?;

            let Some(scan) = read_selection(&mut self.input)? else {
                debug!("input closed during attribute selection");
                return Err(SelectError::EndOfInput);
            };

            let position = match scan {
                Scan::Int(n) => n,
                Scan::Malformed => {
                    debug!("non-numeric selection rejected");
                    writeln!(self.output, "Entrada invalida. Por favor, digite um numero.")?;
                    continue;
                }
                Scan::Overflow => {
                    debug!("selection too large to represent");
                    writeln!(self.output, "Opcao invalida. Tente novamente.")?;
                    continue;
                }
            };

            match menu.resolve(position) {
                Some(attr) => {
                    writeln!(self.output, "Voce escolheu: {attr}")?;
                    info!(attribute = ?attr, position, derived = attr.is_derived(), "attribute selected");
                    return Ok(attr);
                }
                None => {
                    debug!(position, options = menu.len(), "selection out of range");
                    writeln!(self.output, "Opcao invalida. Tente novamente.")?;
                }
            }
        }
    }

    /// Get the input stream.
    pub fn input_mut(&mut self) -> &mut R {
        &mut self.input
    }

    /// Get the output stream.
    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Take back the streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
