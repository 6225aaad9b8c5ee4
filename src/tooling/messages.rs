//! User-facing message catalogue for the two supported UI languages.

use crate::config::Language;

pub struct Messages {
    pub menu_title: &'static str,
    pub menu_items: [&'static str; 7],
    pub command_prompt: &'static str,
    pub unknown_command: &'static str,
    pub goodbye: &'static str,

    pub name_prompt: &'static str,
    pub surname_prompt: &'static str,
    pub search_name_prompt: &'static str,
    pub search_surname_prompt: &'static str,
    pub phone_prompt: &'static str,
    pub birthdate_prompt: &'static str,
    pub optional_birthdate_prompt: &'static str,
    pub change_phone_prompt: &'static str,
    pub change_birthdate_prompt: &'static str,

    pub invalid_phone: &'static str,
    pub phone_taken: &'static str,
    pub invalid_birthdate: &'static str,
    pub cancelled: &'static str,

    pub added: &'static str,
    pub deleted: &'static str,
    pub updated: &'static str,
    pub not_found: &'static str,
    pub duplicate_contact: &'static str,
    pub empty_directory: &'static str,
    pub no_results: &'static str,
    pub age_unknown: &'static str,
    pub age_report: &'static str,

    pub column_name: &'static str,
    pub column_surname: &'static str,
    pub column_phone: &'static str,
    pub column_birthdate: &'static str,
    pub birthdate_unknown: &'static str,
}

impl Messages {
    pub fn for_language(language: Language) -> &'static Messages {
        match language {
            Language::En => &EN,
            Language::Ru => &RU,
        }
    }

    /// `"Age of Ivan Petrov: 20"`, with placeholders filled in.
    pub fn format_age(&self, name: &str, surname: &str, age: i64) -> String {
        self.age_report
            .replace("{name}", name)
            .replace("{surname}", surname)
            .replace("{age}", &age.to_string())
    }

    pub fn format_duplicate(&self, name: &str, surname: &str) -> String {
        self.duplicate_contact
            .replace("{name}", name)
            .replace("{surname}", surname)
    }
}

pub static EN: Messages = Messages {
    menu_title: "Commands:",
    menu_items: [
        "List all contacts",
        "Add a contact",
        "Delete a contact",
        "Update a contact",
        "Search contacts",
        "Show age",
        "Exit",
    ],
    command_prompt: "Enter command",
    unknown_command: "Unknown command, please try again.",
    goodbye: "Exiting...",

    name_prompt: "Name",
    surname_prompt: "Surname",
    search_name_prompt: "Name to search for (leave empty for any)",
    search_surname_prompt: "Surname to search for (leave empty for any)",
    phone_prompt: "Phone number (11 digits, no '+')",
    birthdate_prompt: "Birthdate (dd-mm-yyyy)",
    optional_birthdate_prompt: "Birthdate (dd-mm-yyyy, leave empty if unknown)",
    change_phone_prompt: "Change phone number? (leave empty to keep)",
    change_birthdate_prompt: "Change birthdate? (leave empty to keep)",

    invalid_phone: "Error: the phone number must consist of exactly 11 digits.",
    phone_taken: "Error: this phone number already exists in the directory.",
    invalid_birthdate: "Error: invalid date. Use the format dd-mm-yyyy.",
    cancelled: "Cancelled.",

    added: "Contact added.",
    deleted: "Contact deleted.",
    updated: "Contact updated.",
    not_found: "Contact not found.",
    duplicate_contact: "A contact named {name} {surname} already exists.",
    empty_directory: "The directory is empty.",
    no_results: "No contacts found.",
    age_unknown: "Birthdate is not specified or the contact was not found.",
    age_report: "Age of {name} {surname}: {age}",

    column_name: "Name",
    column_surname: "Surname",
    column_phone: "Phone",
    column_birthdate: "Birthdate",
    birthdate_unknown: "not specified",
};

pub static RU: Messages = Messages {
    menu_title: "Команды:",
    menu_items: [
        "Просмотр всех записей",
        "Добавить новую запись",
        "Удалить запись",
        "Изменить запись",
        "Поиск записи",
        "Вывести возраст",
        "Выйти",
    ],
    command_prompt: "Введите команду",
    unknown_command: "Неизвестная команда, попробуйте снова.",
    goodbye: "Выход из программы...",

    name_prompt: "Введите имя",
    surname_prompt: "Введите фамилию",
    search_name_prompt: "Введите имя для поиска (или оставьте пустым)",
    search_surname_prompt: "Введите фамилию для поиска (или оставьте пустым)",
    phone_prompt: "Введите номер телефона (11 цифр, без '+')",
    birthdate_prompt: "Введите дату рождения (дд-мм-гггг)",
    optional_birthdate_prompt: "Введите дату рождения (дд-мм-гггг) (или оставьте пустым)",
    change_phone_prompt: "Изменить номер телефона? (или оставьте пустым)",
    change_birthdate_prompt: "Изменить дату рождения? (или оставьте пустым)",

    invalid_phone: "Ошибка: Номер телефона должен состоять из 11 цифр.",
    phone_taken: "Ошибка: Этот номер уже существует в справочнике.",
    invalid_birthdate: "Ошибка: Неверный формат даты. Дата должна быть в формате 'дд-мм-гггг'.",
    cancelled: "Отменено.",

    added: "Запись добавлена.",
    deleted: "Запись удалена.",
    updated: "Запись обновлена.",
    not_found: "Запись не найдена.",
    duplicate_contact: "Запись с именем {name} и фамилией {surname} уже существует.",
    empty_directory: "Справочник пуст.",
    no_results: "Записи не найдены.",
    age_unknown: "Дата рождения не указана или запись не найдена.",
    age_report: "Возраст {name} {surname}: {age} лет.",

    column_name: "Имя",
    column_surname: "Фамилия",
    column_phone: "Телефон",
    column_birthdate: "Дата рождения",
    birthdate_unknown: "не указана",
};
