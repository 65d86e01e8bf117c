use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SurahRef {
    pub number: u16,
    pub name: &'static str,
    pub ayah_count: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct JuzRef {
    pub number: u16,
    pub name: &'static str,
    pub start_surah: u16,
    pub start_ayah: u16,
    pub end_surah: u16,
    pub end_ayah: u16,
}

impl JuzRef {
    pub fn is_single_surah(&self) -> bool {
        self.start_surah == self.end_surah
    }
}
