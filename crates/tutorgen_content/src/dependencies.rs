//! Third-party packages a generated program needs.

use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, instrument};

/// Import name to installable package name.
const KNOWN_PACKAGES: [(&str, &str); 14] = [
    ("sklearn", "scikit-learn"),
    ("pandas", "pandas"),
    ("numpy", "numpy"),
    ("matplotlib", "matplotlib"),
    ("seaborn", "seaborn"),
    ("tensorflow", "tensorflow"),
    ("torch", "torch"),
    ("cv2", "opencv-python"),
    ("PIL", "Pillow"),
    ("plotly", "plotly"),
    ("keras", "keras"),
    ("scipy", "scipy"),
    ("xgboost", "xgboost"),
    ("lightgbm", "lightgbm"),
];

/// Top-level module named by an `import X` or `from X` statement.
static IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:import|from)\s+([A-Za-z_][A-Za-z0-9_]*)").expect("import pattern is valid")
});

/// Packages imported by `code`, in first-import order, without duplicates.
///
/// Only well-known ML packages are reported; the standard library and
/// unknown modules are ignored.
///
/// # Examples
///
/// ```
/// use tutorgen_content::detect_dependencies;
///
/// let code = "import numpy as np\nfrom sklearn.cluster import KMeans\nimport numpy";
/// assert_eq!(detect_dependencies(code), vec!["numpy", "scikit-learn"]);
/// ```
#[instrument(level = "debug", skip(code), fields(code_len = code.len()))]
pub fn detect_dependencies(code: &str) -> Vec<String> {
    let mut packages: Vec<String> = Vec::new();
    for captures in IMPORT.captures_iter(code) {
        let Some(module) = captures.get(1) else {
            continue;
        };
        let Some((_, package)) = KNOWN_PACKAGES
            .iter()
            .find(|(import, _)| *import == module.as_str())
        else {
            continue;
        };
        if !packages.iter().any(|p| p == package) {
            packages.push((*package).to_string());
        }
    }
    debug!(count = packages.len(), "Detected dependencies");
    packages
}
