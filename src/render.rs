//! Row renderer / 结果行渲染
//!
//! Turns filtered records into display rows and the HTML search page.

use serde::Serialize;
use std::fmt::Write;
use std::path::{Path, PathBuf};

use crate::models::Record;
use crate::search::SearchQuery;
use crate::utils::{escape_html, file_in_dir};

/// Wiki article base, the item name is appended / Wiki 链接前缀
pub const WIKI_BASE_URL: &str = "https://ringofbrodgar.com/wiki/";
/// Route the image store is served under / 图片路由
pub const IMAGE_ROUTE: &str = "/images";
/// Display width of item images in pixels / 图片显示宽度
pub const IMAGE_WIDTH: u32 = 46;
/// Page title / 页面标题
pub const PAGE_TITLE: &str = "Gilding Database Search";

/// Build the wiki link for an item name / 生成物品的 Wiki 链接
pub fn wiki_url(name: &str) -> String {
    format!("{}{}", WIKI_BASE_URL, name.replace(' ', "_"))
}

/// Directory of item images / 物品图片目录
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Public URL of an image, None when the file is missing / 图片URL（文件不存在时为 None）
    pub fn url_for(&self, image: &str) -> Option<String> {
        file_in_dir(&self.dir, image)?;
        let encoded = image
            .split('/')
            .filter(|part| !part.is_empty() && *part != ".")
            .map(|part| urlencoding::encode(part).into_owned())
            .collect::<Vec<_>>()
            .join("/");
        Some(format!("{}/{}", IMAGE_ROUTE, encoded))
    }
}

/// One display row / 一行显示数据
#[derive(Debug, Clone, Serialize)]
pub struct RowView<'a> {
    #[serde(flatten)]
    pub record: &'a Record,
    pub display_name: &'a str,
    pub wiki_url: String,
    pub image_url: Option<String>,
}

impl<'a> RowView<'a> {
    pub fn new(record: &'a Record, images: &ImageStore) -> Self {
        let display_name = record.display_name();
        Self {
            record,
            display_name,
            wiki_url: wiki_url(display_name),
            image_url: record.image.as_deref().and_then(|image| images.url_for(image)),
        }
    }
}

/// Build rows for filtered records, keeping order / 为过滤结果生成显示行
pub fn build_rows<'a>(records: &[&'a Record], images: &ImageStore) -> Vec<RowView<'a>> {
    records
        .iter()
        .map(|&record| RowView::new(record, images))
        .collect()
}

/// Render one row as HTML / 渲染单行
pub fn render_row(row: &RowView<'_>) -> String {
    let mut html = String::from("<div class=\"row\">\n<div class=\"item\">\n");

    if let Some(url) = &row.image_url {
        let _ = writeln!(
            html,
            "<img src=\"{}\" width=\"{}\" alt=\"{}\">",
            escape_html(url),
            IMAGE_WIDTH,
            escape_html(row.display_name)
        );
    }
    let _ = writeln!(
        html,
        "<p><strong><a href=\"{}\">{}</a></strong></p>",
        escape_html(&row.wiki_url),
        escape_html(row.display_name)
    );
    html.push_str("</div>\n<div class=\"stats\">\n");

    if let Some(chance) = &row.record.gild_chance {
        let _ = writeln!(html, "<p><strong>Chance:</strong> {}</p>", escape_html(chance));
    }
    render_list(&mut html, "Gilds:", &row.record.gilds);
    render_list(&mut html, "Attributes:", &row.record.success_attributes);

    html.push_str("</div>\n</div>\n<hr>\n");
    html
}

fn render_list(html: &mut String, title: &str, entries: &[String]) {
    if entries.is_empty() {
        return;
    }
    let _ = writeln!(html, "<p><strong>{}</strong></p>\n<ul>", title);
    for entry in entries {
        let _ = writeln!(html, "<li>{}</li>", escape_html(entry));
    }
    html.push_str("</ul>\n");
}

/// Render the count line followed by all rows / 渲染计数行与结果列表
pub fn render_results(rows: &[RowView<'_>]) -> String {
    let mut html = format!("<p class=\"count\">Found {} items</p>\n", rows.len());
    for row in rows {
        html.push_str(&render_row(row));
    }
    html
}

/// Render the full search page / 渲染完整搜索页面
pub fn render_page(query: &SearchQuery, rows: &[RowView<'_>]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <link rel="stylesheet" href="/style.css">
</head>
<body>
<div class="block-container">
    <h1>{title}</h1>
    <form method="get" action="/">
        <label>Search item name / category <input type="text" name="name" value="{name}"></label>
        <label>Search gilding stats (gilds) <input type="text" name="gilds" value="{gilds}"></label>
        <label>Search success attributes <input type="text" name="attributes" value="{attributes}"></label>
        <button type="submit">Search</button>
    </form>
{results}</div>
</body>
</html>"#,
        title = PAGE_TITLE,
        name = escape_html(&query.name),
        gilds = escape_html(&query.gilds),
        attributes = escape_html(&query.attributes),
        results = render_results(rows),
    )
}
