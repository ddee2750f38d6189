//! Snapshot tests for rendered file contents.

use sprig_react::{FolderKind, Scaffold, resolve};

/// Render all files for an element, keyed by relative path.
fn render_files(raw: &str, kind: FolderKind) -> Vec<(String, String)> {
    let element = resolve(raw, kind).unwrap();
    Scaffold::new(&element)
        .preview()
        .into_iter()
        .map(|f| (f.path, f.content))
        .collect()
}

fn get_file<'a>(files: &'a [(String, String)], path: &str) -> &'a str {
    files
        .iter()
        .find(|(p, _)| p == path)
        .map(|(_, c)| c.as_str())
        .unwrap_or_else(|| panic!("file {path} not generated"))
}

#[test]
fn test_component_stub() {
    let files = render_files("widgets/Card", FolderKind::Components);
    let stub = get_file(&files, "components/widgets/Card.tsx");

    insta::assert_snapshot!(stub, @r#"
    import { FC } from "react";
    import styles from "./Card.module.css";

    interface CardProps {}

    const Card: FC<CardProps> = () => {
      return <div className={styles.Card}>Card</div>;
    };

    export default Card;
    "#);
}

#[test]
fn test_barrel_file() {
    let files = render_files("widgets/Card", FolderKind::Components);
    let index = get_file(&files, "components/widgets/index.ts");

    insta::assert_snapshot!(index, @r#"export { default } from "./Card";"#);
}

#[test]
fn test_stylesheet_module() {
    let files = render_files("widgets/Card", FolderKind::Components);
    let css = get_file(&files, "components/widgets/Card.module.css");

    insta::assert_snapshot!(css, @r"
    .Card {
    }
    ");
}

#[test]
fn test_page_element_renders_under_pages() {
    let files = render_files("Home", FolderKind::Pages);
    let stub = get_file(&files, "pages/Home/Home.tsx");

    assert!(stub.contains("const Home: FC<HomeProps>"));
    assert!(stub.contains("export default Home;"));
}
