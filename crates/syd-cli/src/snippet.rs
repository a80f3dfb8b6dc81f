//! Python snippet for loading a dataset with `syft_datasets`

use syd_common::Dataset;

/// Build the copyable Python snippet for `dataset`
///
/// Only the dataset name is interpolated. The `print` lines keep their
/// f-string placeholders so the snippet reads the values at run time.
pub fn python_snippet(dataset: &Dataset) -> String {
    format!(
        "import syft_datasets as syd\n\
         \n\
         # Get dataset: {name}\n\
         dataset = syd.datasets.search(\"{name}\")[0]\n\
         print(f\"Dataset: {{dataset.name}} from {{dataset.email}}\")\n\
         print(f\"Syft URL: {{dataset.syft_url}}\")",
        name = dataset.name
    )
}
