//! Tailwind classes for the dashboard. Presentation only, nothing here reads component state.

pub const PAGE: &str = "min-h-screen py-10 bg-gradient-to-br from-[#6a11cb] to-[#2575fc]";
pub const CARD: &str = "max-w-[700px] mx-auto my-10 p-6 rounded-2xl bg-white shadow-[0_8px_20px_rgba(0,0,0,0.1)]";
pub const HEADING: &str = "text-[28px] font-bold text-center mb-8 text-[#333]";

pub const INPUT: &str = "w-full p-3 mb-1 border border-[#ccc] rounded-[10px] text-base text-gray-900";
pub const FIELD_ERROR: &str = "text-red-600 text-sm mb-2.5";
pub const ALERT: &str = "bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded relative mb-4";

const SUBMIT_BASE: &str = "w-full p-3 text-white rounded-[10px] cursor-pointer text-base mt-2.5 transition duration-200 disabled:opacity-50 disabled:cursor-wait";
const SUBMIT_CREATE: &str = "bg-[#28a745] hover:bg-[#218838]";
const SUBMIT_UPDATE: &str = "bg-[#007bff] hover:bg-[#0069d9]";

pub const TABLE: &str = "w-full mt-5 border-collapse";
pub const TH: &str = "bg-[#007bff] text-white p-3 rounded-md";
pub const TR: &str = "border-b border-[#ddd]";
pub const TD: &str = "p-3 text-center text-[15px] text-gray-900";
pub const EDIT_BUTTON: &str = "bg-[#17a2b8] py-1.5 px-3 text-white rounded-md cursor-pointer mr-1";
pub const DELETE_BUTTON: &str = "bg-[#dc3545] py-1.5 px-3 text-white rounded-md cursor-pointer";

pub fn submit_button(editing: bool) -> String {
    let colour = if editing { SUBMIT_UPDATE } else { SUBMIT_CREATE };
    format!("{SUBMIT_BASE} {colour}")
}
