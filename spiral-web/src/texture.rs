/// Surface texture: a 1×1 placeholder replaced by an image once it loads
use spiral_core::PLACEHOLDER_PIXEL;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlImageElement, WebGlRenderingContext as GL, WebGlTexture};

use crate::error::ViewerError;

/// Create the texture on unit 0 and fill it with the placeholder pixel.
pub fn create_placeholder(gl: &GL) -> Result<WebGlTexture, ViewerError> {
    let texture = gl
        .create_texture()
        .ok_or(ViewerError::ResourceCreation("texture"))?;

    gl.active_texture(GL::TEXTURE0);
    gl.bind_texture(GL::TEXTURE_2D, Some(&texture));
    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_MIN_FILTER, GL::LINEAR as i32);
    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_MAG_FILTER, GL::LINEAR as i32);
    // WebGL 1 only samples non-power-of-two images with clamped wrapping
    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_S, GL::CLAMP_TO_EDGE as i32);
    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_T, GL::CLAMP_TO_EDGE as i32);

    gl.tex_image_2d_with_i32_and_i32_and_i32_and_format_and_type_and_opt_u8_array(
        GL::TEXTURE_2D,
        0,
        GL::RGBA as i32,
        1,
        1,
        0,
        GL::RGBA,
        GL::UNSIGNED_BYTE,
        Some(&PLACEHOLDER_PIXEL[..]),
    )?;

    Ok(texture)
}

/// Replace the texture contents with a loaded image.
pub fn upload_image(
    gl: &GL,
    texture: &WebGlTexture,
    image: &HtmlImageElement,
) -> Result<(), ViewerError> {
    gl.bind_texture(GL::TEXTURE_2D, Some(texture));
    gl.tex_image_2d_with_u32_and_u32_and_image(
        GL::TEXTURE_2D,
        0,
        GL::RGBA as i32,
        GL::RGBA,
        GL::UNSIGNED_BYTE,
        image,
    )?;
    Ok(())
}

/// Start fetching `url`; `on_load` runs once with the decoded image.
pub fn load_image<F>(url: &str, on_load: F) -> Result<(), ViewerError>
where
    F: FnOnce(HtmlImageElement) + 'static,
{
    let image = HtmlImageElement::new()?;
    image.set_cross_origin(Some("anonymous"));

    let loaded = image.clone();
    let onload = Closure::once_into_js(move || on_load(loaded));
    image.set_onload(Some(onload.unchecked_ref()));

    let failed_url = url.to_string();
    let onerror = Closure::once_into_js(move || {
        tracing::warn!(url = %failed_url, "texture image failed to load, keeping placeholder");
    });
    image.set_onerror(Some(onerror.unchecked_ref()));

    tracing::debug!(url, "loading texture image");
    image.set_src(url);
    Ok(())
}
