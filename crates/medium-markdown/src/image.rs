//! Picks the webp variant out of a `srcset` and turns it into an image link,
//! downloading it first when image downloads are enabled.

use crate::context::ConversionContext;
use crate::options::ImageExtension;
use crate::ConvertError;
use std::fs;

const PREFERRED_VARIANT: &str = "webp";
const FALLBACK_EXTENSION: &str = "png";

/// First space separated `srcset` token containing `webp`. There is no
/// fallback to other encodings.
pub fn select_webp(srcset: &str) -> Option<&str> {
    srcset
        .split(' ')
        .map(str::trim)
        .find(|token| token.contains(PREFERRED_VARIANT))
}

fn extension_for(url: &str, policy: ImageExtension) -> String {
    match policy {
        ImageExtension::Png => FALLBACK_EXTENSION.to_string(),
        ImageExtension::FromSource => {
            let path = url.split(['?', '#']).next().unwrap_or_default();
            path.rsplit('/')
                .next()
                .and_then(|file| file.rsplit_once('.'))
                .map(|(_, ext)| ext.to_ascii_lowercase())
                .filter(|ext| {
                    !ext.is_empty() && ext.len() <= 5 && ext.chars().all(|c| c.is_ascii_alphanumeric())
                })
                .unwrap_or_else(|| FALLBACK_EXTENSION.to_string())
        }
    }
}

pub fn materialize_image(
    srcset: &str,
    ctx: &mut ConversionContext<'_>,
) -> Result<Option<String>, ConvertError> {
    let Some(link) = select_webp(srcset) else {
        ctx.warn(ConvertError::UnsupportedMarkup {
            message: format!("no {} variant in srcset \"{}\"", PREFERRED_VARIANT, srcset),
        });
        return Ok(None);
    };

    if !ctx.download_images {
        return Ok(Some(format!("![{}]({})\n", ctx.image_alt, link)));
    }

    let bytes = match ctx.fetcher().fetch(link) {
        Ok(bytes) => bytes,
        Err(e) => {
            ctx.warn(e);
            return Ok(None);
        }
    };

    let file_name = ctx.next_image_file_name(&extension_for(link, ctx.image_extension));
    let image_dir = ctx.image_dir();
    if !image_dir.exists() {
        fs::create_dir_all(&image_dir).map_err(|e| ConvertError::filesystem(&image_dir, e))?;
        tracing::info!("Created image directory: {:?}", image_dir);
    }

    let image_path = image_dir.join(&file_name);
    fs::write(&image_path, &bytes).map_err(|e| ConvertError::filesystem(&image_path, e))?;
    tracing::debug!("Saved {} bytes from {} to {:?}", bytes.len(), link, image_path);
    ctx.record_saved_image(&image_path);

    Ok(Some(format!(
        "![{}]({}/{})\n",
        ctx.image_alt, ctx.link_image_path, file_name
    )))
}
