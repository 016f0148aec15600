use eframe::egui;
use shared::domain::Sex;

pub const LINK: egui::Color32 = egui::Color32::from_rgb(72, 95, 199);
pub const DANGER: egui::Color32 = egui::Color32::from_rgb(241, 70, 104);
pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(72, 199, 142);
pub const INFO: egui::Color32 = egui::Color32::from_rgb(62, 142, 208);

pub const SECTION_GAP: f32 = 12.0;
pub const CHIP_GAP: f32 = 4.0;

/// Owner names are tinted by sex: link blue for men, danger red for women.
pub fn owner_color(sex: Sex) -> egui::Color32 {
    match sex {
        Sex::Male => LINK,
        Sex::Female => DANGER,
    }
}

pub fn chip_fill(active: bool, all_chip: bool) -> egui::Color32 {
    match (active, all_chip) {
        (true, true) => SUCCESS,
        (true, false) => INFO,
        (false, _) => egui::Color32::TRANSPARENT,
    }
}
