//! Open / display / close lifecycle for rendering BMP files one at a time.

use std::fs::File;
use std::io::{BufReader, Read, Seek, Write};
use std::path::Path;

use log::debug;

use crate::decode::{DecodeRequest, DecodedImage};
use crate::error::BmpError;
use crate::limits::Limits;
use crate::render::{self, RenderOptions};

/// Holds at most one decoded image at a time.
///
/// Opening a file discards whatever was open before, including when the new
/// open fails part-way, so a failed file never leaves stale pixels behind.
#[derive(Debug, Default)]
pub struct BmpViewer {
    options: RenderOptions,
    limits: Option<Limits>,
    image: Option<DecodedImage>,
}

impl BmpViewer {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            limits: None,
            image: None,
        }
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    pub fn open<P: AsRef<Path>>(&mut self, path: P) -> Result<(), BmpError> {
        self.close();
        let path = path.as_ref();
        debug!("Opening {}", path.display());
        let file = File::open(path)?;
        self.open_reader(BufReader::new(file))
    }

    pub fn open_reader<R: Read + Seek>(&mut self, reader: R) -> Result<(), BmpError> {
        self.close();
        let mut request = DecodeRequest::new(reader);
        if let Some(limits) = &self.limits {
            request = request.with_limits(limits);
        }
        let image = request.decode()?;
        debug!(
            "Decoded {}x{} {:?}",
            image.width(),
            image.height(),
            image.pixel_layout()
        );
        self.image = Some(image);
        Ok(())
    }

    /// Render the open image. Does nothing when no image is open.
    pub fn display<W: Write>(&self, out: &mut W) -> Result<(), BmpError> {
        match &self.image {
            Some(image) => render::render_image(image, self.options, out),
            None => Ok(()),
        }
    }

    pub fn close(&mut self) {
        if self.image.take().is_some() {
            debug!("Closed image");
        }
    }

    pub fn append_new_line<W: Write>(&self, out: &mut W) -> Result<(), BmpError> {
        render::append_blank_line(out)
    }

    pub fn is_open(&self) -> bool {
        self.image.is_some()
    }

    pub fn image(&self) -> Option<&DecodedImage> {
        self.image.as_ref()
    }
}
