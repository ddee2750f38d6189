//! Component stub generator.

use std::path::{Path, PathBuf};

use sprig_core::{FileRules, GeneratedFile};

use crate::element::Element;

/// The `<Name>.tsx` component stub.
///
/// Fully owned by the tool: rewritten on every run. The stub declares an
/// empty `<Name>Props` interface, imports the sibling stylesheet module and
/// default-exports the component.
pub struct ComponentTsx<'a> {
    element: &'a Element,
}

impl<'a> ComponentTsx<'a> {
    pub fn new(element: &'a Element) -> Self {
        Self { element }
    }
}

impl GeneratedFile for ComponentTsx<'_> {
    fn path(&self, root: &Path) -> PathBuf {
        root.join(self.element.dir())
            .join(format!("{}.tsx", self.element.name()))
    }

    fn rules(&self) -> FileRules {
        FileRules::always()
    }

    fn render(&self) -> String {
        let name = self.element.name();
        format!(
            r#"import {{ FC }} from "react";
import styles from "./{name}.module.css";

interface {name}Props {{}}

const {name}: FC<{name}Props> = () => {{
  return <div className={{styles.{name}}}>{name}</div>;
}};

export default {name};
"#
        )
    }
}
