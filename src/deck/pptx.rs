//! PresentationML writer.
//!
//! Produces the smallest package PowerPoint and LibreOffice open without repair: one master,
//! one blank layout, one theme, then one part per slide. Pictures are embedded once per
//! distinct source file. Entry timestamps are fixed so equal decks give equal bytes.

use std::{
    collections::BTreeMap,
    fmt::Write as _,
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use zip::{ZipWriter, write::SimpleFileOptions};

use crate::{
    config::Theme,
    deck::Deck,
    foundation::{
        core::{BBox, Rgb, inches_to_emu},
        error::{DeckError, DeckResult},
    },
    slide::{Align, Anchor, Cell, Element, Image, Shape, ShapeKind, Slide, Table, TextBox, TextStyle},
};

const EMU_PER_PT: f64 = 12_700.0;
const FIRST_SLIDE_ID: usize = 256;
const MASTER_ID: u64 = 2_147_483_648;
const FONT_FALLBACK: &str = "Malgun Gothic";

const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
const REL_BASE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

macro_rules! w {
    ($xml:expr, $($arg:tt)*) => {
        write!($xml, $($arg)*).map_err(xml_err)?
    };
}

fn xml_err(e: std::fmt::Error) -> DeckError {
    DeckError::serialize(format!("failed to format xml: {e}"))
}

/// Escape markup characters and drop control characters XML 1.0 cannot carry.
fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' | '\n' | '\r' => out.push(c),
            c if c < '\u{20}' || c == '\u{FFFE}' || c == '\u{FFFF}' => {}
            c => out.push(c),
        }
    }
    out
}

fn pt_to_emu(pt: f64) -> i64 {
    (pt * EMU_PER_PT).round() as i64
}

/// Write `deck` to `path` through a temporary sibling file.
///
/// The destination is replaced only after the archive is complete, so a failure leaves any
/// previous file untouched.
#[tracing::instrument(skip_all, fields(slides = deck.slides.len(), path = %path.display()))]
pub fn write_pptx(deck: &Deck, path: &Path) -> DeckResult<()> {
    validate_deck(deck)?;

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)
        .with_context(|| format!("create output directory '{}'", parent.display()))?;

    let media = MediaTable::collect(deck)?;
    let tmp = tempfile::NamedTempFile::new_in(parent)
        .with_context(|| format!("create temporary file in '{}'", parent.display()))?;

    let mut package = Package::new(tmp.as_file());
    write_parts(&mut package, deck, &media)?;
    package.finish()?;

    tmp.persist(path)
        .map_err(|e| DeckError::serialize(format!("persist '{}': {}", path.display(), e.error)))?;
    tracing::info!(media = media.len(), "wrote presentation");
    Ok(())
}

fn validate_deck(deck: &Deck) -> DeckResult<()> {
    for (index, slide) in deck.slides.iter().enumerate() {
        for element in &slide.elements {
            if !element.bbox().is_valid() {
                return Err(DeckError::layout(format!(
                    "slide {}: element has invalid bounds {:?}",
                    index + 1,
                    element.bbox()
                )));
            }
        }
        for table in slide.tables() {
            table
                .validate()
                .map_err(|e| DeckError::layout(format!("slide {}: {e}", index + 1)))?;
        }
    }
    Ok(())
}

struct Package<W: std::io::Write + std::io::Seek> {
    zip: ZipWriter<W>,
    options: SimpleFileOptions,
}

impl<W: std::io::Write + std::io::Seek> Package<W> {
    fn new(inner: W) -> Self {
        Self {
            zip: ZipWriter::new(inner),
            options: SimpleFileOptions::default()
                .compression_method(zip::CompressionMethod::Deflated)
                .last_modified_time(zip::DateTime::default()),
        }
    }

    fn add(&mut self, name: &str, bytes: &[u8]) -> DeckResult<()> {
        self.zip
            .start_file(name, self.options)
            .map_err(|e| DeckError::serialize(format!("start '{name}': {e}")))?;
        self.zip
            .write_all(bytes)
            .map_err(|e| DeckError::serialize(format!("write '{name}': {e}")))
    }

    fn finish(self) -> DeckResult<()> {
        self.zip
            .finish()
            .map_err(|e| DeckError::serialize(format!("finish archive: {e}")))?;
        Ok(())
    }
}

/// Embedded pictures keyed by source path, in first-use order.
struct MediaTable {
    by_path: BTreeMap<PathBuf, String>,
    parts: Vec<(String, Vec<u8>)>,
}

impl MediaTable {
    fn collect(deck: &Deck) -> DeckResult<Self> {
        let mut table = Self {
            by_path: BTreeMap::new(),
            parts: Vec::new(),
        };
        for image in deck.slides.iter().flat_map(Slide::images) {
            if table.by_path.contains_key(&image.path) {
                continue;
            }
            let bytes = std::fs::read(&image.path)
                .with_context(|| format!("read image '{}'", image.path.display()))?;
            let name = format!("image{}.{}", table.parts.len() + 1, media_ext(&image.path));
            table.by_path.insert(image.path.clone(), name.clone());
            table.parts.push((name, bytes));
        }
        Ok(table)
    }

    fn name_for(&self, path: &Path) -> DeckResult<&str> {
        self.by_path
            .get(path)
            .map(String::as_str)
            .ok_or_else(|| DeckError::serialize(format!("image '{}' not collected", path.display())))
    }

    fn len(&self) -> usize {
        self.parts.len()
    }
}

fn media_ext(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "jpeg",
        Some("gif") => "gif",
        _ => "png",
    }
}

fn write_parts<W: std::io::Write + std::io::Seek>(
    package: &mut Package<W>,
    deck: &Deck,
    media: &MediaTable,
) -> DeckResult<()> {
    let n = deck.slides.len();

    package.add("[Content_Types].xml", content_types_xml(n)?.as_bytes())?;
    package.add("_rels/.rels", root_rels_xml().as_bytes())?;
    package.add("docProps/core.xml", core_xml(deck).as_bytes())?;
    package.add("docProps/app.xml", app_xml(n)?.as_bytes())?;
    package.add("ppt/presentation.xml", presentation_xml(deck)?.as_bytes())?;
    package.add(
        "ppt/_rels/presentation.xml.rels",
        presentation_rels_xml(n)?.as_bytes(),
    )?;
    package.add("ppt/slideMasters/slideMaster1.xml", MASTER_XML.as_bytes())?;
    package.add(
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        rels_xml(&[
            ("rId1", "slideLayout", "../slideLayouts/slideLayout1.xml"),
            ("rId2", "theme", "../theme/theme1.xml"),
        ])?
        .as_bytes(),
    )?;
    package.add("ppt/slideLayouts/slideLayout1.xml", LAYOUT_XML.as_bytes())?;
    package.add(
        "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
        rels_xml(&[("rId1", "slideMaster", "../slideMasters/slideMaster1.xml")])?.as_bytes(),
    )?;
    package.add("ppt/theme/theme1.xml", theme_xml(&deck.theme)?.as_bytes())?;

    let font = match deck.theme.font_face.as_str() {
        "" => FONT_FALLBACK,
        face => face,
    };
    for (index, slide) in deck.slides.iter().enumerate() {
        let (xml, rels) = slide_xml(slide, media, font)?;
        package.add(&format!("ppt/slides/slide{}.xml", index + 1), xml.as_bytes())?;
        package.add(
            &format!("ppt/slides/_rels/slide{}.xml.rels", index + 1),
            rels.as_bytes(),
        )?;
    }
    for (name, bytes) in &media.parts {
        package.add(&format!("ppt/media/{name}"), bytes)?;
    }
    Ok(())
}

fn content_types_xml(slides: usize) -> DeckResult<String> {
    let mut xml = String::with_capacity(2048);
    xml.push_str(XML_DECL);
    xml.push_str(
        r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    );
    xml.push_str(r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#);
    xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);
    xml.push_str(r#"<Default Extension="png" ContentType="image/png"/>"#);
    xml.push_str(r#"<Default Extension="jpeg" ContentType="image/jpeg"/>"#);
    xml.push_str(r#"<Default Extension="gif" ContentType="image/gif"/>"#);
    xml.push_str(r#"<Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>"#);
    xml.push_str(r#"<Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>"#);
    xml.push_str(r#"<Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>"#);
    xml.push_str(r#"<Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>"#);
    for i in 1..=slides {
        w!(
            xml,
            r#"<Override PartName="/ppt/slides/slide{i}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#
        );
    }
    xml.push_str(r#"<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>"#);
    xml.push_str(r#"<Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>"#);
    xml.push_str("</Types>");
    Ok(xml)
}

fn root_rels_xml() -> String {
    let mut xml = String::from(XML_DECL);
    xml.push_str(
        r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );
    xml.push_str(r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/>"#);
    xml.push_str(r#"<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>"#);
    xml.push_str(r#"<Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/>"#);
    xml.push_str("</Relationships>");
    xml
}

fn rels_xml(entries: &[(&str, &str, &str)]) -> DeckResult<String> {
    let mut xml = String::from(XML_DECL);
    xml.push_str(
        r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );
    for (id, kind, target) in entries {
        w!(
            xml,
            r#"<Relationship Id="{id}" Type="{REL_BASE}/{kind}" Target="{}"/>"#,
            escape_xml(target)
        );
    }
    xml.push_str("</Relationships>");
    Ok(xml)
}

fn core_xml(deck: &Deck) -> String {
    let mut xml = String::from(XML_DECL);
    xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);
    xml.push_str("<dc:title>");
    xml.push_str(&escape_xml(&deck.title));
    xml.push_str("</dc:title><dc:subject>");
    xml.push_str(&escape_xml(&deck.subject));
    xml.push_str("</dc:subject><dc:creator>");
    xml.push_str(&escape_xml(&deck.author));
    xml.push_str("</dc:creator><cp:lastModifiedBy>");
    xml.push_str(&escape_xml(&deck.author));
    xml.push_str("</cp:lastModifiedBy></cp:coreProperties>");
    xml
}

fn app_xml(slides: usize) -> DeckResult<String> {
    let mut xml = String::from(XML_DECL);
    xml.push_str(r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties">"#);
    w!(
        xml,
        "<Application>deckgen</Application><Slides>{slides}</Slides><AppVersion>{}</AppVersion>",
        env!("CARGO_PKG_VERSION")
    );
    xml.push_str("</Properties>");
    Ok(xml)
}

fn presentation_xml(deck: &Deck) -> DeckResult<String> {
    let mut xml = String::with_capacity(2048);
    xml.push_str(XML_DECL);
    w!(
        xml,
        r#"<p:presentation xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}" saveSubsetFonts="1">"#
    );
    w!(
        xml,
        r#"<p:sldMasterIdLst><p:sldMasterId id="{MASTER_ID}" r:id="rId1"/></p:sldMasterIdLst>"#
    );
    if !deck.slides.is_empty() {
        xml.push_str("<p:sldIdLst>");
        for i in 0..deck.slides.len() {
            w!(
                xml,
                r#"<p:sldId id="{}" r:id="rId{}"/>"#,
                FIRST_SLIDE_ID + i,
                i + 2
            );
        }
        xml.push_str("</p:sldIdLst>");
    }
    let (w, h) = deck.layout.size_inches();
    w!(
        xml,
        r#"<p:sldSz cx="{}" cy="{}"/>"#,
        inches_to_emu(w),
        inches_to_emu(h)
    );
    xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
    xml.push_str("</p:presentation>");
    Ok(xml)
}

fn presentation_rels_xml(slides: usize) -> DeckResult<String> {
    let slide_targets: Vec<(String, String)> = (1..=slides)
        .map(|i| (format!("rId{}", i + 1), format!("slides/slide{i}.xml")))
        .collect();
    let theme_id = format!("rId{}", slides + 2);

    let mut entries = vec![("rId1", "slideMaster", "slideMasters/slideMaster1.xml")];
    entries.extend(
        slide_targets
            .iter()
            .map(|(id, target)| (id.as_str(), "slide", target.as_str())),
    );
    entries.push((theme_id.as_str(), "theme", "theme/theme1.xml"));
    rels_xml(&entries)
}

const SP_TREE_OPEN: &str = r#"<p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#;

/// Slide part and its relationships.
fn slide_xml(slide: &Slide, media: &MediaTable, font: &str) -> DeckResult<(String, String)> {
    let mut xml = String::with_capacity(4096);
    xml.push_str(XML_DECL);
    w!(xml, r#"<p:sld xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}">"#);
    xml.push_str("<p:cSld>");
    xml.push_str(SP_TREE_OPEN);

    let mut rels: Vec<(String, String)> = Vec::new();
    for (index, element) in slide.elements.iter().enumerate() {
        let id = index + 2;
        match element {
            Element::Shape(shape) => shape_xml(&mut xml, id, shape)?,
            Element::TextBox(text) => text_box_xml(&mut xml, id, text, font)?,
            Element::Image(image) => {
                let target = format!("../media/{}", media.name_for(&image.path)?);
                let rel_id = match rels.iter().find(|(_, t)| *t == target) {
                    Some((rid, _)) => rid.clone(),
                    None => {
                        let rid = format!("rId{}", rels.len() + 2);
                        rels.push((rid.clone(), target));
                        rid
                    }
                };
                picture_xml(&mut xml, id, image, &rel_id)?;
            }
            Element::Table(table) => table_xml(&mut xml, id, table, font)?,
        }
    }

    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:sld>");

    let mut entries = vec![("rId1", "slideLayout", "../slideLayouts/slideLayout1.xml")];
    entries.extend(
        rels.iter()
            .map(|(id, target)| (id.as_str(), "image", target.as_str())),
    );
    Ok((xml, rels_xml(&entries)?))
}

fn xfrm_xml(xml: &mut String, bbox: BBox) -> DeckResult<()> {
    let (x, y, cx, cy) = bbox.to_emu();
    w!(
        xml,
        r#"<a:xfrm><a:off x="{x}" y="{y}"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm>"#
    );
    Ok(())
}

fn solid_fill(xml: &mut String, color: Rgb) -> DeckResult<()> {
    w!(xml, r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, color.to_hex());
    Ok(())
}

fn geometry_xml(xml: &mut String, kind: ShapeKind, bbox: BBox) -> DeckResult<()> {
    match kind {
        ShapeKind::Rect => xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#),
        ShapeKind::Oval => xml.push_str(r#"<a:prstGeom prst="ellipse"><a:avLst/></a:prstGeom>"#),
        ShapeKind::RoundRect { radius } => {
            // adj is the corner radius as a fraction of the shorter side, in 1/100000
            let short = bbox.w.min(bbox.h);
            let adj = if short > 0.0 {
                (radius / short * 100_000.0).clamp(0.0, 50_000.0).round() as i64
            } else {
                0
            };
            w!(
                xml,
                r#"<a:prstGeom prst="roundRect"><a:avLst><a:gd name="adj" fmla="val {adj}"/></a:avLst></a:prstGeom>"#
            );
        }
    }
    Ok(())
}

fn shape_xml(xml: &mut String, id: usize, shape: &Shape) -> DeckResult<()> {
    let name = match shape.kind {
        ShapeKind::Rect => "Rectangle",
        ShapeKind::RoundRect { .. } => "Rounded Rectangle",
        ShapeKind::Oval => "Oval",
    };
    xml.push_str("<p:sp><p:nvSpPr>");
    w!(xml, r#"<p:cNvPr id="{id}" name="{name} {id}"/>"#);
    xml.push_str("<p:cNvSpPr/><p:nvPr/></p:nvSpPr><p:spPr>");
    xfrm_xml(xml, shape.bbox)?;
    geometry_xml(xml, shape.kind, shape.bbox)?;

    match shape.style.fill {
        Some(color) => solid_fill(xml, color)?,
        None => xml.push_str("<a:noFill/>"),
    }
    match shape.style.line {
        Some(stroke) => {
            w!(xml, r#"<a:ln w="{}">"#, pt_to_emu(stroke.width_pt));
            solid_fill(xml, stroke.color)?;
            xml.push_str("</a:ln>");
        }
        None => xml.push_str("<a:ln><a:noFill/></a:ln>"),
    }
    if let Some(shadow) = shape.style.shadow {
        w!(
            xml,
            r#"<a:effectLst><a:outerShdw blurRad="{}" dist="{}" dir="{}" algn="tl" rotWithShape="0"><a:srgbClr val="000000"><a:alpha val="{}"/></a:srgbClr></a:outerShdw></a:effectLst>"#,
            pt_to_emu(shadow.blur_pt),
            pt_to_emu(shadow.offset_pt),
            (shadow.angle_deg * 60_000.0).round() as i64,
            (shadow.opacity.clamp(0.0, 1.0) * 100_000.0).round() as i64
        );
    }
    xml.push_str("</p:spPr></p:sp>");
    Ok(())
}

fn align_attr(align: Align) -> &'static str {
    match align {
        Align::Left => "l",
        Align::Center => "ctr",
        Align::Right => "r",
    }
}

fn anchor_attr(anchor: Anchor) -> &'static str {
    match anchor {
        Anchor::Top => "t",
        Anchor::Middle => "ctr",
        Anchor::Bottom => "b",
    }
}

/// One paragraph per line of `text`, each a single run.
fn paragraphs_xml(
    xml: &mut String,
    text: &str,
    style: &TextStyle,
    font: &str,
) -> DeckResult<()> {
    for line in text.split('\n') {
        w!(xml, r#"<a:p><a:pPr algn="{}"/>"#, align_attr(style.align));
        let size = (style.size_pt * 100.0).round() as i64;
        let end_props = format!(r#" lang="ko-KR" sz="{size}""#);
        if line.is_empty() {
            w!(xml, "<a:endParaRPr{end_props}/></a:p>");
            continue;
        }
        w!(xml, r#"<a:r><a:rPr lang="ko-KR" sz="{size}""#);
        if style.bold {
            xml.push_str(r#" b="1""#);
        }
        xml.push_str(r#" dirty="0">"#);
        solid_fill(xml, style.color)?;
        let face = escape_xml(font);
        w!(xml, r#"<a:latin typeface="{face}"/><a:ea typeface="{face}"/>"#);
        xml.push_str("</a:rPr>");
        w!(xml, "<a:t>{}</a:t></a:r>", escape_xml(line));
        xml.push_str("</a:p>");
    }
    Ok(())
}

fn text_box_xml(xml: &mut String, id: usize, text: &TextBox, font: &str) -> DeckResult<()> {
    xml.push_str("<p:sp><p:nvSpPr>");
    w!(xml, r#"<p:cNvPr id="{id}" name="TextBox {id}"/>"#);
    xml.push_str(r#"<p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr><p:spPr>"#);
    xfrm_xml(xml, text.bbox)?;
    xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:noFill/></p:spPr>"#);
    w!(
        xml,
        r#"<p:txBody><a:bodyPr wrap="square" lIns="91440" tIns="45720" rIns="91440" bIns="45720" anchor="{}" rtlCol="0"><a:noAutofit/></a:bodyPr><a:lstStyle/>"#,
        anchor_attr(text.style.anchor)
    );
    paragraphs_xml(xml, &text.text, &text.style, font)?;
    xml.push_str("</p:txBody></p:sp>");
    Ok(())
}

fn picture_xml(xml: &mut String, id: usize, image: &Image, rel_id: &str) -> DeckResult<()> {
    let descr = image
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    xml.push_str("<p:pic><p:nvPicPr>");
    w!(
        xml,
        r#"<p:cNvPr id="{id}" name="Picture {id}" descr="{}"/>"#,
        escape_xml(&descr)
    );
    xml.push_str(r#"<p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr><p:nvPr/></p:nvPicPr>"#);
    w!(
        xml,
        r#"<p:blipFill><a:blip r:embed="{rel_id}"/><a:stretch><a:fillRect/></a:stretch></p:blipFill>"#
    );
    xml.push_str("<p:spPr>");
    xfrm_xml(xml, image.bbox)?;
    xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr></p:pic>"#);
    Ok(())
}

fn cell_xml(xml: &mut String, cell: &Cell, table: &Table, font: &str) -> DeckResult<()> {
    let style = TextStyle {
        bold: cell.bold.unwrap_or(table.text.bold),
        color: cell.color.unwrap_or(table.text.color),
        ..table.text
    };
    xml.push_str("<a:tc><a:txBody><a:bodyPr/><a:lstStyle/>");
    paragraphs_xml(xml, &cell.text, &style, font)?;
    w!(xml, r#"</a:txBody><a:tcPr anchor="{}">"#, anchor_attr(style.anchor));
    let width = pt_to_emu(table.border.width_pt);
    for side in ["lnL", "lnR", "lnT", "lnB"] {
        w!(xml, r#"<a:{side} w="{width}">"#);
        solid_fill(xml, table.border.color)?;
        w!(xml, "</a:{side}>");
    }
    if let Some(fill) = cell.fill {
        solid_fill(xml, fill)?;
    }
    xml.push_str("</a:tcPr></a:tc>");
    Ok(())
}

fn table_xml(xml: &mut String, id: usize, table: &Table, font: &str) -> DeckResult<()> {
    let (x, y, cx, cy) = table.bbox.to_emu();
    xml.push_str("<p:graphicFrame><p:nvGraphicFramePr>");
    w!(xml, r#"<p:cNvPr id="{id}" name="Table {id}"/>"#);
    xml.push_str(r#"<p:cNvGraphicFramePr><a:graphicFrameLocks noGrp="1"/></p:cNvGraphicFramePr><p:nvPr/></p:nvGraphicFramePr>"#);
    w!(
        xml,
        r#"<p:xfrm><a:off x="{x}" y="{y}"/><a:ext cx="{cx}" cy="{cy}"/></p:xfrm>"#
    );
    xml.push_str(r#"<a:graphic><a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/table"><a:tbl><a:tblPr firstRow="1"/><a:tblGrid>"#);
    for width in table.col_widths() {
        w!(xml, r#"<a:gridCol w="{}"/>"#, inches_to_emu(width));
    }
    xml.push_str("</a:tblGrid>");
    let row_h = inches_to_emu(table.row_height());
    for row in table.all_rows() {
        w!(xml, r#"<a:tr h="{row_h}">"#);
        for cell in row {
            cell_xml(xml, cell, table, font)?;
        }
        xml.push_str("</a:tr>");
    }
    xml.push_str("</a:tbl></a:graphicData></a:graphic></p:graphicFrame>");
    Ok(())
}

const MASTER_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<p:sldMaster xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#,
    r#"<p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>"#,
    r#"<p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr></p:spTree></p:cSld>"#,
    r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#,
    r#"<p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst>"#,
    r#"<p:txStyles><p:titleStyle/><p:bodyStyle/><p:otherStyle/></p:txStyles>"#,
    r#"</p:sldMaster>"#
);

const LAYOUT_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<p:sldLayout xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" type="blank" preserve="1">"#,
    r#"<p:cSld name="Blank"><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr></p:spTree></p:cSld>"#,
    r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#,
    r#"</p:sldLayout>"#
);

/// Office theme whose color scheme carries the brand palette.
fn theme_xml(theme: &Theme) -> DeckResult<String> {
    let mut xml = String::with_capacity(4096);
    xml.push_str(XML_DECL);
    w!(xml, r#"<a:theme xmlns:a="{NS_A}" name="deckgen">"#);
    xml.push_str(r#"<a:themeElements><a:clrScheme name="deckgen">"#);
    xml.push_str(r#"<a:dk1><a:srgbClr val="000000"/></a:dk1><a:lt1><a:srgbClr val="FFFFFF"/></a:lt1>"#);
    w!(
        xml,
        r#"<a:dk2><a:srgbClr val="{}"/></a:dk2><a:lt2><a:srgbClr val="{}"/></a:lt2>"#,
        theme.navy.to_hex(),
        theme.light_gray.to_hex()
    );
    for (i, color) in [
        theme.navy,
        theme.red,
        theme.green,
        theme.orange,
        theme.blue,
        theme.purple,
    ]
    .iter()
    .enumerate()
    {
        w!(
            xml,
            r#"<a:accent{n}><a:srgbClr val="{hex}"/></a:accent{n}>"#,
            n = i + 1,
            hex = color.to_hex()
        );
    }
    xml.push_str(r#"<a:hlink><a:srgbClr val="0563C1"/></a:hlink><a:folHlink><a:srgbClr val="954F72"/></a:folHlink></a:clrScheme>"#);
    let face = escape_xml(if theme.font_face.is_empty() {
        FONT_FALLBACK
    } else {
        &theme.font_face
    });
    w!(
        xml,
        r#"<a:fontScheme name="deckgen"><a:majorFont><a:latin typeface="{face}"/><a:ea typeface="{face}"/><a:cs typeface=""/></a:majorFont><a:minorFont><a:latin typeface="{face}"/><a:ea typeface="{face}"/><a:cs typeface=""/></a:minorFont></a:fontScheme>"#
    );
    xml.push_str(concat!(
        r#"<a:fmtScheme name="deckgen">"#,
        r#"<a:fillStyleLst><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:fillStyleLst>"#,
        r#"<a:lnStyleLst><a:ln w="6350"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln><a:ln w="12700"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln><a:ln w="19050"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln></a:lnStyleLst>"#,
        r#"<a:effectStyleLst><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle></a:effectStyleLst>"#,
        r#"<a:bgFillStyleLst><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:bgFillStyleLst>"#,
        r#"</a:fmtScheme></a:themeElements></a:theme>"#
    ));
    Ok(xml)
}

#[cfg(test)]
#[path = "../../tests/unit/deck/pptx.rs"]
mod tests;
