//! Status strings the views put into their state. The interface is in
//! Uzbek; fixed labels live in the templates.

pub const LOADING: &str = "Yuklanmoqda...";

/// Shown when a list fetch fails for any reason.
pub const LOAD_ERROR: &str = "Ma'lumot yuklashda xato";

/// Shown when the single-post fetch fails for any reason.
pub const DETAIL_ERROR: &str = "Xatolik yuz berdi!";

pub const DELETE_ERROR: &str = "Foydalanuvchini o'chirishda xato";
pub const CREATE_OK: &str = "Foydalanuvchi muvaffaqiyatli qo'shildi";
pub const CREATE_ERROR: &str = "Foydalanuvchi qo'shishda xato";
