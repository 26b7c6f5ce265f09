//! Page selection and per-page output for a run.
//!
//! Every page gets its own output file and its own
//! [`Translator`](crate::translator::Translator). A page whose output cannot
//! be opened or written fails on its own; the remaining pages are still
//! converted and the [`BatchReport`] tells which ones failed.

use crate::config::TranslatorConfig;
use crate::error::{Error, Result};
use crate::trace::PageTrace;
use crate::translator::{PageSummary, Translator};
use std::path::{Path, PathBuf};

/// Placeholder replaced with the 1-based page number.
const PAGE_PLACEHOLDER: &str = "%d";

/// Which pages of a document to convert.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PageSelection {
    /// Only the first page
    #[default]
    First,
    /// The page with this label, or failing that this 1-based number
    Label(String),
    /// Every page, one output per page
    All,
}

impl PageSelection {
    /// Interpret a command-line page argument (`None`, `"all"` or a label).
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None => PageSelection::First,
            Some("all") => PageSelection::All,
            Some(label) => PageSelection::Label(label.to_string()),
        }
    }

    /// Resolve against a document's pages, as `(1-based number, page)` pairs.
    pub fn resolve<'a>(&self, pages: &'a [PageTrace]) -> Result<Vec<(usize, &'a PageTrace)>> {
        match self {
            PageSelection::First => pages
                .first()
                .map(|page| vec![(1, page)])
                .ok_or_else(|| Error::PageNotFound("1".to_string())),
            PageSelection::All => Ok(pages.iter().enumerate().map(|(i, p)| (i + 1, p)).collect()),
            PageSelection::Label(label) => {
                if let Some(i) = pages.iter().position(|p| p.label.as_deref() == Some(label)) {
                    return Ok(vec![(i + 1, &pages[i])]);
                }
                label
                    .parse::<usize>()
                    .ok()
                    .filter(|&n| n >= 1 && n <= pages.len())
                    .map(|n| vec![(n, &pages[n - 1])])
                    .ok_or_else(|| Error::PageNotFound(label.clone()))
            },
        }
    }
}

/// Output file name pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTemplate(String);

impl OutputTemplate {
    /// Wrap a file name pattern.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    /// Whether the pattern names pages individually.
    pub fn is_numbered(&self) -> bool {
        self.0.contains(PAGE_PLACEHOLDER)
    }

    /// Output path for a page.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_impro::batch::OutputTemplate;
    /// use std::path::PathBuf;
    ///
    /// let template = OutputTemplate::new("out/page-%d.imp");
    /// assert_eq!(template.path_for(3), PathBuf::from("out/page-3.imp"));
    /// ```
    pub fn path_for(&self, page_number: usize) -> PathBuf {
        PathBuf::from(self.0.replace(PAGE_PLACEHOLDER, &page_number.to_string()))
    }
}

/// Conversion result of one page.
#[derive(Debug)]
pub struct PageOutcome {
    /// 1-based page number
    pub page_number: usize,
    /// Destination file
    pub output: PathBuf,
    /// Summary on success, the page's fatal error otherwise
    pub result: Result<PageSummary>,
}

/// Conversion results of a run, in page order.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// One entry per converted page
    pub pages: Vec<PageOutcome>,
}

impl BatchReport {
    /// Pages that converted cleanly.
    pub fn succeeded(&self) -> usize {
        self.pages.iter().filter(|p| p.result.is_ok()).count()
    }

    /// Pages whose conversion failed.
    pub fn failed(&self) -> usize {
        self.pages.len() - self.succeeded()
    }

    /// Whether every page converted.
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

/// Translate one page's events into the file at `output`.
pub fn convert_page(
    page: &PageTrace,
    output: &Path,
    config: &TranslatorConfig,
) -> Result<PageSummary> {
    let mut translator = Translator::create(output, config.clone())?;
    translator.replay(&page.events);
    translator.finish()
}

/// Convert the selected pages, each into its own output.
///
/// Fails outright only when the selection or template is unusable; page
/// failures are collected in the report.
pub fn convert_pages(
    pages: &[PageTrace],
    selection: &PageSelection,
    template: &OutputTemplate,
    config: &TranslatorConfig,
) -> Result<BatchReport> {
    let selected = selection.resolve(pages)?;
    let expand = *selection == PageSelection::All;
    if expand && selected.len() > 1 && !template.is_numbered() {
        return Err(Error::InvalidTemplate(template.0.clone()));
    }

    let mut report = BatchReport::default();
    for (page_number, page) in selected {
        let output = if expand {
            template.path_for(page_number)
        } else {
            PathBuf::from(&template.0)
        };
        log::info!("Converting page {} to {}", page_number, output.display());

        let result = convert_page(page, &output, config);
        if let Err(err) = &result {
            log::error!("Page {} failed: {}", page_number, err);
        }
        report.pages.push(PageOutcome {
            page_number,
            output,
            result,
        });
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages() -> Vec<PageTrace> {
        vec![
            PageTrace {
                label: Some("i".to_string()),
                events: Vec::new(),
            },
            PageTrace {
                label: Some("ii".to_string()),
                events: Vec::new(),
            },
            PageTrace {
                label: Some("1".to_string()),
                events: Vec::new(),
            },
        ]
    }

    #[test]
    fn test_from_arg() {
        assert_eq!(PageSelection::from_arg(None), PageSelection::First);
        assert_eq!(PageSelection::from_arg(Some("all")), PageSelection::All);
        assert_eq!(PageSelection::from_arg(Some("iv")), PageSelection::Label("iv".to_string()));
    }

    #[test]
    fn test_resolve_first_and_all() {
        let pages = pages();
        let first = PageSelection::First.resolve(&pages).unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].0, 1);

        let all = PageSelection::All.resolve(&pages).unwrap();
        assert_eq!(all.iter().map(|(n, _)| *n).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_resolve_label_before_number() {
        let pages = pages();
        let by_label = PageSelection::Label("1".to_string()).resolve(&pages).unwrap();
        assert_eq!(by_label[0].0, 3);

        let by_number = PageSelection::Label("2".to_string()).resolve(&pages).unwrap();
        assert_eq!(by_number[0].1.label.as_deref(), Some("ii"));
    }

    #[test]
    fn test_resolve_missing() {
        let pages = pages();
        assert!(matches!(
            PageSelection::Label("9".to_string()).resolve(&pages),
            Err(Error::PageNotFound(_))
        ));
        assert!(matches!(PageSelection::First.resolve(&[]), Err(Error::PageNotFound(_))));
    }

    #[test]
    fn test_template() {
        let template = OutputTemplate::new("page%d.txt");
        assert!(template.is_numbered());
        assert_eq!(template.path_for(12), PathBuf::from("page12.txt"));
        assert!(!OutputTemplate::new("out.txt").is_numbered());
    }

    #[test]
    fn test_all_pages_need_numbered_template() {
        let err = convert_pages(
            &pages(),
            &PageSelection::All,
            &OutputTemplate::new("out.txt"),
            &TranslatorConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidTemplate(_)));
    }
}
