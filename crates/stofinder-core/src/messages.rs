//! Fixed conversation texts shown by the chat front end.

/// Reply to `/start`.
pub const WELCOME: &str = "Привіт! 🚛 Я допоможу знайти найближчі СТО.\n\n\
    Оберіть один із способів:\n\
    📍 Надіслати геолокацію - для автоматичного визначення\n\
    ✏️ Ввести країну та індекс - для ручного введення";

/// Prompt sent after the user chooses manual address entry.
pub const ADDRESS_PROMPT: &str = "Введіть адресу у форматі: Країна, Місто, Поштовий індекс\n\
    Наприклад: Україна, Рівне, 33000";

/// Reply when forward geocoding cannot resolve the typed address.
pub const ADDRESS_NOT_FOUND: &str =
    "❌ Не вдалося знайти вказану адресу. Спробуйте ще раз або скористайтеся геолокацією.";

/// Reply to `/help`.
pub const HELP: &str = "🚛 **Довідка по боту СТО**\n\n\
    **Команди:**\n\
    /start - Почати роботу з ботом\n\
    /help - Показати цю довідку\n\n\
    **Як користуватися:**\n\
    1️⃣ Натисніть \"📍 Надіслати геолокацію\" для автоматичного пошуку\n\
    2️⃣ Або натисніть \"✏️ Ввести країну та індекс\" для ручного введення\n\n\
    Бот знайде найближчі СТО в радіусі 50 км від вашого місцезнаходження.";
