mod authorization;
mod decor;
mod layout;
mod sections;
mod wrap;

use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref, Str, TextStr};

use crate::error::Error;
use crate::fonts::{PT_PER_MM, register_fonts, to_winansi_bytes};
use crate::model::Claim;
use crate::options::RenderOptions;
use crate::signature::DecodedImage;

pub use authorization::AuthorizationKind;
pub use layout::{DrawOp, Page, PageGeometry, PlacedItem};
pub use sections::{PLACEHOLDER, SectionKind, section_plan};
pub use wrap::wrap_text;

use authorization::add_authorization_page;
use layout::Layout;
use sections::render_sections;

/// A fully laid-out claim: every page's draw operations plus the decoded
/// signature images they reference.
#[derive(Clone, Debug)]
pub struct ClaimDocument {
    pub claim_id: String,
    pub geometry: PageGeometry,
    pub pages: Vec<Page>,
    pub images: Vec<DecodedImage>,
}

impl ClaimDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Every section title in document order, authorization pages included.
    pub fn section_titles(&self) -> Vec<&str> {
        self.pages
            .iter()
            .flat_map(|p| p.sections.iter().map(String::as_str))
            .collect()
    }

    /// The page on which the section titled `title` starts.
    pub fn page_of_section(&self, title: &str) -> Option<&Page> {
        self.pages
            .iter()
            .find(|p| p.sections.iter().any(|s| s == title))
    }

    pub fn image_count(&self) -> usize {
        self.pages.iter().map(Page::image_count).sum()
    }
}

/// Lays out `claim` into pages. Signature images are decoded up front so a
/// bad image fails the render before anything is drawn.
pub fn layout_claim(claim: &Claim, options: &RenderOptions) -> Result<ClaimDocument, Error> {
    let mut images: Vec<DecodedImage> = Vec::new();
    let mut image_for = [None; 2];
    for (slot, kind) in AuthorizationKind::ALL.into_iter().enumerate() {
        if let Some(signature) = kind.block(claim).signature() {
            let decoded = signature.image().decode()?;
            log::debug!(
                "{}: signature image {}x{} (alpha: {})",
                kind.title(),
                decoded.width,
                decoded.height,
                decoded.alpha.is_some()
            );
            image_for[slot] = Some(images.len());
            images.push(decoded);
        }
    }

    let mut layout = Layout::begin(options);
    render_sections(&mut layout, claim);
    for (slot, kind) in AuthorizationKind::ALL.into_iter().enumerate() {
        add_authorization_page(&mut layout, kind, claim, image_for[slot]);
    }
    let pages = layout.finish();

    Ok(ClaimDocument {
        claim_id: claim.id.clone(),
        geometry: options.geometry,
        pages,
        images,
    })
}

/// Lays out and serializes `claim` to PDF bytes.
pub fn render(claim: &Claim, options: &RenderOptions) -> Result<Vec<u8>, Error> {
    let t0 = std::time::Instant::now();
    let doc = layout_claim(claim, options)?;
    let t_layout = t0.elapsed();

    let bytes = write_pdf(&doc, options)?;
    let t_write = t0.elapsed();

    log::info!(
        "Render phases: layout={:.1}ms, write={:.1}ms ({} pages, {} images)",
        t_layout.as_secs_f64() * 1000.0,
        (t_write - t_layout).as_secs_f64() * 1000.0,
        doc.page_count(),
        doc.images.len(),
    );
    Ok(bytes)
}

fn rgb(color: [u8; 3]) -> (f32, f32, f32) {
    (
        color[0] as f32 / 255.0,
        color[1] as f32 / 255.0,
        color[2] as f32 / 255.0,
    )
}

/// Translate one page's draw operations into a content stream. Layout
/// coordinates are millimetres from the top-left; PDF user space is points
/// from the bottom-left.
fn page_content(page: &Page, geometry: &PageGeometry) -> Content {
    let x_pt = |x: f32| x * PT_PER_MM;
    let y_pt = |y: f32| (geometry.height - y) * PT_PER_MM;

    let mut content = Content::new();
    for op in &page.ops {
        match op {
            DrawOp::FillRect {
                x,
                y,
                width,
                height,
                color,
            } => {
                let (r, g, b) = rgb(*color);
                content.save_state();
                content.set_fill_rgb(r, g, b);
                content.rect(x_pt(*x), y_pt(y + height), width * PT_PER_MM, height * PT_PER_MM);
                content.fill_nonzero();
                content.restore_state();
            }
            DrawOp::Text {
                x,
                y,
                text,
                style,
                size,
                color,
            } => {
                let bytes = to_winansi_bytes(text);
                if bytes.is_empty() {
                    continue;
                }
                let (r, g, b) = rgb(*color);
                content.save_state();
                content.set_fill_rgb(r, g, b);
                content.begin_text();
                content.set_font(Name(style.pdf_name().as_bytes()), *size);
                content.next_line(x_pt(*x), y_pt(*y));
                content.show(Str(&bytes));
                content.end_text();
                content.restore_state();
            }
            DrawOp::Line {
                x1,
                y1,
                x2,
                y2,
                width,
            } => {
                content.save_state();
                content.set_stroke_gray(0.0);
                content.set_line_width(width * PT_PER_MM);
                content.move_to(x_pt(*x1), y_pt(*y1));
                content.line_to(x_pt(*x2), y_pt(*y2));
                content.stroke();
                content.restore_state();
            }
            DrawOp::Image {
                index,
                x,
                y,
                width,
                height,
            } => {
                let name = image_name(*index);
                content.save_state();
                content.transform([
                    width * PT_PER_MM,
                    0.0,
                    0.0,
                    height * PT_PER_MM,
                    x_pt(*x),
                    y_pt(y + height),
                ]);
                content.x_object(Name(name.as_bytes()));
                content.restore_state();
            }
        }
    }
    content
}

fn image_name(index: usize) -> String {
    format!("Im{}", index + 1)
}

fn embed_image(pdf: &mut Pdf, img: &DecodedImage, alloc: &mut impl FnMut() -> Ref) -> Ref {
    let xobj_ref = alloc();
    let compressed_rgb = miniz_oxide::deflate::compress_to_vec_zlib(&img.rgb, 6);

    let smask_ref = img.alpha.as_ref().map(|alpha| {
        let compressed_alpha = miniz_oxide::deflate::compress_to_vec_zlib(alpha, 6);
        let mask_ref = alloc();
        let mut mask = pdf.image_xobject(mask_ref, &compressed_alpha);
        mask.filter(Filter::FlateDecode);
        mask.width(img.width as i32);
        mask.height(img.height as i32);
        mask.color_space().device_gray();
        mask.bits_per_component(8);
        mask_ref
    });

    let mut xobj = pdf.image_xobject(xobj_ref, &compressed_rgb);
    xobj.filter(Filter::FlateDecode);
    xobj.width(img.width as i32);
    xobj.height(img.height as i32);
    xobj.color_space().device_rgb();
    xobj.bits_per_component(8);
    if let Some(mask_ref) = smask_ref {
        xobj.s_mask(mask_ref);
    }
    xobj_ref
}

fn write_pdf(doc: &ClaimDocument, options: &RenderOptions) -> Result<Vec<u8>, Error> {
    if doc.pages.is_empty() {
        return Err(Error::Pdf("document has no pages".into()));
    }
    if let Some(index) = doc.pages.iter().flat_map(|p| &p.ops).find_map(|op| match op {
        DrawOp::Image { index, .. } if *index >= doc.images.len() => Some(*index),
        _ => None,
    }) {
        return Err(Error::Pdf(format!("page references missing image #{index}")));
    }

    let mut pdf = Pdf::new();
    let mut next_id = 1i32;
    let mut alloc = || {
        let r = Ref::new(next_id);
        next_id += 1;
        r
    };

    let catalog_id = alloc();
    let pages_id = alloc();
    let info_id = alloc();

    let fonts = register_fonts(&mut pdf, &mut alloc);

    let image_xobjects: Vec<(String, Ref)> = doc
        .images
        .iter()
        .enumerate()
        .map(|(i, img)| (image_name(i), embed_image(&mut pdf, img, &mut alloc)))
        .collect();

    let n = doc.pages.len();
    let page_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();
    let content_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();

    for (i, page) in doc.pages.iter().enumerate() {
        let raw = page_content(page, &doc.geometry).finish();
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(raw.as_slice(), 6);
        pdf.stream(content_ids[i], &compressed).filter(Filter::FlateDecode);
    }

    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id)
        .kids(page_ids.iter().copied())
        .count(n as i32);

    let media_box = Rect::new(
        0.0,
        0.0,
        doc.geometry.width * PT_PER_MM,
        doc.geometry.height * PT_PER_MM,
    );
    for i in 0..n {
        let mut page = pdf.page(page_ids[i]);
        page.media_box(media_box)
            .parent(pages_id)
            .contents(content_ids[i]);
        let mut resources = page.resources();
        {
            let mut font_dict = resources.fonts();
            for entry in &fonts {
                font_dict.pair(Name(entry.style.pdf_name().as_bytes()), entry.font_ref);
            }
        }
        if !image_xobjects.is_empty() {
            let mut xobjects = resources.x_objects();
            for (name, xobj_ref) in &image_xobjects {
                xobjects.pair(Name(name.as_bytes()), *xobj_ref);
            }
        }
    }

    let title = format!("Claim {}", doc.claim_id);
    pdf.document_info(info_id)
        .title(TextStr(&title))
        .author(TextStr(&options.brand))
        .producer(TextStr(concat!("nofault-pdf ", env!("CARGO_PKG_VERSION"))));

    Ok(pdf.finish())
}
