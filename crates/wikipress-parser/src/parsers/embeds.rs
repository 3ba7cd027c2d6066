//! Image embed rewrites: `![[image.png]]`, `![[image.png|300]]`, `![[image.png|A caption]]`
//!
//! The most specific form wins: a suffix made only of digits, pipes and
//! whitespace is a width, any other suffix is a caption.

use crate::parsers::link_utils::image_extension;
use crate::scanner::{self, WikiLink};

/// How an image embed is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageForm<'a> {
    Plain,
    Width(&'a str),
    Caption(&'a str),
}

impl<'a> ImageForm<'a> {
    /// Classify the text after the first `|` of an embed.
    pub fn from_suffix(suffix: Option<&'a str>) -> Self {
        match suffix {
            None | Some("") => ImageForm::Plain,
            Some(s) if s.chars().all(|c| c.is_ascii_digit() || c == '|' || c.is_whitespace()) => {
                ImageForm::Width(s)
            }
            Some(s) => ImageForm::Caption(s),
        }
    }
}

/// Convert image embeds into HTML tags with sources under `base`.
pub fn convert_images(content: &str, base: &str) -> String {
    scanner::rewrite(content, |link| render_image(link, base))
}

fn render_image(link: &WikiLink<'_>, base: &str) -> Option<String> {
    if !link.embed {
        return None;
    }
    let target = link.target();
    let ext = image_extension(target)?;
    let name = &target[..target.len() - ext.len()];

    let html = match ImageForm::from_suffix(link.alias()) {
        ImageForm::Plain => format!(r#"<img src="{base}/{target}" alt="{name}">"#),
        ImageForm::Width(width) => {
            format!(r#"<img src="{base}/{target}" width="{width}" alt="{name}">"#)
        }
        ImageForm::Caption(caption) => format!(
            "<figure class=\"center\">\n\
             <img src=\"{base}/{target}\" style=\"width: 100%\" alt=\"{name}\" title=\"{name}\"/>\n\
             <figcaption><p style=\"text-align:center;\">{caption}</p></figcaption>\n\
             </figure>"
        ),
    };
    Some(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://example.com/images";

    #[test]
    fn test_plain_image() {
        assert_eq!(
            convert_images("![[image.png]]", BASE),
            r#"<img src="http://example.com/images/image.png" alt="image">"#
        );
    }

    #[test]
    fn test_multiple_images() {
        assert_eq!(
            convert_images("![[image1.jpeg]] and ![[image2.webp]]", BASE),
            r#"<img src="http://example.com/images/image1.jpeg" alt="image1"> and <img src="http://example.com/images/image2.webp" alt="image2">"#
        );
    }

    #[test]
    fn test_no_images() {
        assert_eq!(convert_images("No images here", BASE), "No images here");
        assert_eq!(convert_images("[[image.png]]", BASE), "[[image.png]]");
        assert_eq!(convert_images("![[Note]]", BASE), "![[Note]]");
    }

    #[test]
    fn test_width_suffix() {
        assert_eq!(
            convert_images("![[name.png|123]]", BASE),
            r#"<img src="http://example.com/images/name.png" width="123" alt="name">"#
        );
    }

    #[test]
    fn test_caption_suffix() {
        let html = convert_images("![[dir/plot.jpg|Figure 1: a plot]]", "/img");
        insta::assert_snapshot!(html, @r#"
<figure class="center">
<img src="/img/dir/plot.jpg" style="width: 100%" alt="dir/plot" title="dir/plot"/>
<figcaption><p style="text-align:center;">Figure 1: a plot</p></figcaption>
</figure>
"#);
    }

    #[test]
    fn test_suffix_classification() {
        assert_eq!(ImageForm::from_suffix(None), ImageForm::Plain);
        assert_eq!(ImageForm::from_suffix(Some("")), ImageForm::Plain);
        assert_eq!(ImageForm::from_suffix(Some("300 ")), ImageForm::Width("300 "));
        assert_eq!(ImageForm::from_suffix(Some("300px")), ImageForm::Caption("300px"));
    }
}
