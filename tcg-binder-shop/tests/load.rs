use std::fs;
use std::path::Path;

use tcg_binder_shop::{
    PricingMode, ShopError, load_category_index, load_listing, load_products, load_tree,
    visible_categories,
};
use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn data_dir() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    write(
        dir,
        "categories.json",
        r#"{
            "books": {"name": "Books", "image": "/images/books.png"},
            "board games": {"name": "Board Games", "image": "/images/bg.png", "url": "bg.html"},
            "empty": {"name": "Empty", "image": ""},
            "broken": {"name": "Broken", "image": ""},
            "missing": {"name": "Missing", "image": ""}
        }"#,
    );
    write(
        dir,
        "books.json",
        r#"{"books": {"name": "Books", "children": {"manga": {"name": "Manga"}}}}"#,
    );
    write(dir, "books/manga.json", r#"{"items": [{"id": 3, "name": "Vol. 1", "price": 7}]}"#);
    write(dir, "boardgames.json", r#"[{"id": 9, "name": "Catan", "price": "35"}]"#);
    write(dir, "empty.json", "[]");
    write(dir, "broken.json", "{ not json");
    tmp
}

#[test]
fn index_loads_and_links() {
    let tmp = data_dir();
    let index = load_category_index(tmp.path()).unwrap();
    assert_eq!(index.len(), 5);
    assert_eq!(index["board games"].link("board games"), "bg.html");
    assert_eq!(index["books"].link("books"), "items.html?category=books");
}

#[test]
fn only_categories_with_items_are_visible() {
    let tmp = data_dir();
    let keys: Vec<String> = visible_categories(tmp.path())
        .unwrap()
        .into_iter()
        .map(|c| c.key)
        .collect();
    assert_eq!(keys, vec!["board games", "books"]);
}

#[test]
fn missing_directory_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let err = load_category_index(&tmp.path().join("nope")).unwrap_err();
    assert!(matches!(err, ShopError::DirNotFound(_)));
}

#[test]
fn tree_falls_back_to_index_entry() {
    let tmp = data_dir();
    let tree = load_tree(tmp.path(), "empty").unwrap();
    assert_eq!(tree["empty"].name.as_deref(), Some("Empty"));
    assert_eq!(tree["empty"].image, None);

    let err = load_tree(tmp.path(), "unlisted").unwrap_err();
    assert!(matches!(err, ShopError::NotFound(_)));
}

#[test]
fn product_files_accept_both_shapes() {
    let tmp = data_dir();
    let wrapped = load_products(tmp.path(), &["books", "manga"]).unwrap();
    assert_eq!(wrapped[0].id, "3");
    let bare = load_products(tmp.path(), &["boardgames"]).unwrap();
    assert_eq!(bare[0].price, 35.0);
    assert!(matches!(
        load_products(tmp.path(), &["broken"]),
        Err(ShopError::Parse { .. })
    ));
}

#[test]
fn listing_combines_tree_and_product_file() {
    let tmp = data_dir();
    let top = load_listing(tmp.path(), &["books"]).unwrap();
    assert_eq!(top.breadcrumb, "Books");
    assert_eq!(top.subcategories.len(), 1);
    assert!(top.products.is_empty());

    let manga = load_listing(tmp.path(), &["books", "manga"]).unwrap();
    assert_eq!(manga.breadcrumb, "Books / Manga");
    assert_eq!(manga.products.len(), 1);
    let price = manga.products[0].breakdown(PricingMode::Wishlist, true);
    assert_eq!(price.total, 8.0);
}
