/// Keys the lightbox reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    Previous,
    Next,
}

impl LightboxKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" | "Esc" => Some(LightboxKey::Escape),
            "ArrowLeft" => Some(LightboxKey::Previous),
            "ArrowRight" => Some(LightboxKey::Next),
            _ => None,
        }
    }
}

/// Full-screen gallery viewer state for one mounted detail page.
///
/// Navigation is clamped to the gallery; there is no wraparound.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lightbox {
    len: usize,
    current: Option<usize>,
}

impl Lightbox {
    pub fn new(gallery_len: usize) -> Self {
        Self {
            len: gallery_len,
            current: None,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    #[inline]
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Returns false for an out-of-range index.
    pub fn open(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.current = Some(index);
        true
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    pub fn previous(&mut self) -> bool {
        match self.current {
            Some(k) if k > 0 => {
                self.current = Some(k - 1);
                true
            }
            _ => false,
        }
    }

    pub fn next(&mut self) -> bool {
        match self.current {
            Some(k) if k + 1 < self.len => {
                self.current = Some(k + 1);
                true
            }
            _ => false,
        }
    }

    pub fn has_previous(&self) -> bool {
        matches!(self.current, Some(k) if k > 0)
    }

    pub fn has_next(&self) -> bool {
        matches!(self.current, Some(k) if k + 1 < self.len)
    }

    /// Apply a key press. Keys are ignored while closed. Returns true when
    /// the state changed.
    pub fn handle_key(&mut self, key: LightboxKey) -> bool {
        if !self.is_open() {
            return false;
        }
        match key {
            LightboxKey::Escape => {
                self.close();
                true
            }
            LightboxKey::Previous => self.previous(),
            LightboxKey::Next => self.next(),
        }
    }

    /// "k / M" counter text, 1-based.
    pub fn counter(&self) -> Option<String> {
        self.current.map(|k| format!("{} / {}", k + 1, self.len))
    }
}
