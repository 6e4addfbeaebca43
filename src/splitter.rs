/// Marker starting a new entry when found at the start of a (trimmed) line
pub const ENTRY_MARKER: char = '@';

/// A lazy iterator grouping the lines of a `.bib` file into raw entries.
///
/// Remember, that a DBLP entry looks as follows:
///
/// ```tex
/// @book{DBLP:books/lib/Knuth97,
///   author    = {Donald Ervin Knuth},
///   year      = {1997}
/// }
/// ```
///
/// Every trimmed line starting with `@` opens a new entry; all lines up to
/// the next such line belong to it. The lines of one entry are joined with
/// single spaces. Lines before the first `@` are kept with the first entry.
pub struct RawEntries<I> {
    lines: I,
    accumulator: Vec<String>,
    started: bool, // has the accumulator seen an `@` line yet?
    exhausted: bool,
}

impl<I, S> RawEntries<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    pub fn new(lines: I) -> RawEntries<I> {
        RawEntries {
            lines,
            accumulator: Vec::new(),
            started: false,
            exhausted: false,
        }
    }

    /// Hand out the accumulated entry, unless it holds nothing but whitespace.
    fn flush(&mut self) -> Option<String> {
        let entry = self.accumulator.join(" ");
        self.accumulator.clear();
        if entry.trim().is_empty() {
            None
        } else {
            Some(entry)
        }
    }
}

impl<I, S> Iterator for RawEntries<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        while let Some(line) = self.lines.next() {
            let line = line.as_ref().trim();
            let marker = line.starts_with(ENTRY_MARKER);
            let completed = if marker && self.started {
                self.flush()
            } else {
                None
            };
            self.started |= marker;
            self.accumulator.push(line.to_string());
            if completed.is_some() {
                return completed;
            }
        }
        self.exhausted = true;
        self.flush()
    }
}
