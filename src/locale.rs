use std::collections::HashMap;

lazy_static! {
  static ref STRINGS: HashMap<&'static str, &'static str> = {
    let mut m = HashMap::new();
    m.insert("user_registered", "{} теперь участвует в розыгрышах 🎉");
    m.insert("user_already_registered", "{} уже зарегистрирован");
    m.insert("user_not_participating", "{} и так не участвует");
    m.insert("user_deleted", "{} больше не участвует. Возвращайся!");
    m.insert("at_least_one_user", "Нужен хотя бы один участник. Регистрация: /reg");
    m.insert("update_users", "Юзернеймы участников обновлены");
    m.insert("stat_reset", "Статистика «{}» сброшена");

    m.insert("clown_of_day", "Клоун дня");
    m.insert("hero_of_day", "Герой дня");

    m.insert("clown_active_winner", "Клоун дня уже выбран, это {} 🤡");
    m.insert("hero_active_winner", "Герой дня уже выбран, это {} 🦸");

    m.insert("clown_winner", "Клоун дня — {}! Уже {}-й раз 🤡");
    m.insert("hero_winner", "Герой дня — {}! Уже {}-й раз 🦸");

    m.insert("clown_list_header", "Статистика клоунов за всё время:");
    m.insert("hero_list_header", "Статистика героев за всё время:");

    m.insert(
      "clown_of_day_set1",
      "Инициирую поиск клоуна дня...\nСканирую чат на предмет красных носов...\nЦель обнаружена. Навожусь...",
    );
    m.insert(
      "clown_of_day_set2",
      "Шапито открывает двери!\nБарабанная дробь... 🥁\nПрожектор выхватывает из темноты...",
    );
    m.insert(
      "clown_of_day_set3",
      "Опрашиваю свидетелей...\nСверяю показания с архивом цирка...\nВердикт готов!",
    );

    m.insert(
      "hero_of_day_set1",
      "Городу нужен новый герой...\nПросматриваю заявки...\nДостойный найден!",
    );
    m.insert(
      "hero_of_day_set2",
      "Сигнал в небе! 🦇\nКто-то должен откликнуться...\nПлащ выдан. Встречайте...",
    );
    m.insert(
      "hero_of_day_set3",
      "Подвиги сочтены...\nКомиссия совещается...\nЕдиногласное решение!",
    );
    m
  };
}

/// Localized string lookup with positional `{}` substitution.
/// Unknown keys fall back to the key itself so a missing string is
/// visible in chat instead of silently dropped.
pub fn loc(key: &str, args: &[&str]) -> String {
  let mut text = STRINGS.get(key).copied().unwrap_or(key).to_string();
  for arg in args {
    text = text.replacen("{}", arg, 1);
  }
  text
}
