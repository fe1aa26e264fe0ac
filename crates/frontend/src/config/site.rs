//! Конфигурация сайта: реквизиты компании, контакты, условия доставки.
//! Единственное место, где меняются тексты «шапки» и статических страниц.

pub mod company {
    pub const NAME: &str = "Paida All";
    pub const SLOGAN: &str = "Оптовые поставки";
    pub const DESCRIPTION: &str =
        "Оптовые поставки товаров в Караганде. Работаем с физическими и юридическими лицами.";
}

pub mod contacts {
    pub const PHONE: &str = "+7 (778) 085-54-78";
    pub const PHONE_RAW: &str = "+77780855478";
    pub const WHATSAPP: &str = "77780855478";
    pub const EMAIL: &str = "info@paidaall.kz";
    pub const CITY: &str = "Караганда";
    pub const ADDRESS: &str = "г. Караганда";
    pub const WORKING_HOURS: &str = "Без выходных 9:00-21:00";
}

pub mod delivery {
    /// Порог бесплатной доставки, в целых единицах валюты
    pub const FREE_FROM: f64 = 50_000.0;
    pub const CURRENCY: &str = "₸";
    pub const TIME: &str = "1-2 рабочих дня";
    pub const ZONE: &str = "Караганда и пригороды";
}

/// Ссылка на исходящее сообщение WhatsApp с предзаполненным текстом
pub fn whatsapp_link(message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        contacts::WHATSAPP,
        urlencoding::encode(message)
    )
}

pub fn phone_link() -> String {
    format!("tel:{}", contacts::PHONE_RAW)
}
