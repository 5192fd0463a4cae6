//! Per-language relative-time vocabulary.

use crate::plural::PluralCategory;
use crate::relative_time::unit::TimeUnit;

/// How a language places the direction marker around the quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordOrder {
    /// Marker first in both directions: "vor 3 Tagen", "in 3 Tagen".
    Prefix,
    /// Past marker last, future marker first: "3 days ago", "in 3 days".
    PastSuffix,
    /// Number, unit and marker with no separating space: "3日前".
    Suffix,
}

/// Long-style names of one unit, one per plural category.
#[derive(Debug, Clone, Copy)]
pub(crate) struct UnitForms {
    zero: &'static str,
    one: &'static str,
    two: &'static str,
    few: &'static str,
    many: &'static str,
    other: &'static str,
}

impl UnitForms {
    pub(crate) fn select(&self, category: PluralCategory) -> &'static str {
        match category {
            PluralCategory::Zero => self.zero,
            PluralCategory::One => self.one,
            PluralCategory::Two => self.two,
            PluralCategory::Few => self.few,
            PluralCategory::Many => self.many,
            PluralCategory::Other => self.other,
        }
    }
}

const fn invariant(form: &'static str) -> UnitForms {
    UnitForms {
        zero: form,
        one: form,
        two: form,
        few: form,
        many: form,
        other: form,
    }
}

const fn one_other(one: &'static str, other: &'static str) -> UnitForms {
    UnitForms {
        zero: other,
        one,
        two: other,
        few: other,
        many: other,
        other,
    }
}

const fn slavic(
    one: &'static str,
    few: &'static str,
    many: &'static str,
    other: &'static str,
) -> UnitForms {
    UnitForms {
        zero: many,
        one,
        two: few,
        few,
        many,
        other,
    }
}

const fn arabic(
    one: &'static str,
    two: &'static str,
    few: &'static str,
    many: &'static str,
    other: &'static str,
) -> UnitForms {
    UnitForms {
        zero: other,
        one,
        two,
        few,
        many,
        other,
    }
}

/// Names of one unit in every style.
#[derive(Debug, Clone, Copy)]
pub(crate) struct UnitNames {
    pub(crate) long: UnitForms,
    pub(crate) short: &'static str,
    pub(crate) narrow: &'static str,
}

const fn names(long: UnitForms, short: &'static str, narrow: &'static str) -> UnitNames {
    UnitNames {
        long,
        short,
        narrow,
    }
}

/// Fixed phrases used instead of a number in `Auto` mode.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Phrases {
    pub(crate) just_now: &'static str,
    pub(crate) today: &'static str,
    pub(crate) yesterday: &'static str,
    pub(crate) tomorrow: &'static str,
    pub(crate) last_week: &'static str,
    pub(crate) next_week: &'static str,
    pub(crate) last_month: &'static str,
    pub(crate) next_month: &'static str,
    pub(crate) last_year: &'static str,
    pub(crate) next_year: &'static str,
}

/// Everything needed to phrase relative times in one language.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LocaleTable {
    pub(crate) order: WordOrder,
    pub(crate) past: &'static str,
    pub(crate) future: &'static str,
    /// Indexed in [`TimeUnit`] declaration order, seconds first.
    pub(crate) units: [UnitNames; 7],
    pub(crate) phrases: Phrases,
}

impl LocaleTable {
    pub(crate) fn unit(&self, unit: TimeUnit) -> &UnitNames {
        let index = match unit {
            TimeUnit::Second => 0,
            TimeUnit::Minute => 1,
            TimeUnit::Hour => 2,
            TimeUnit::Day => 3,
            TimeUnit::Week => 4,
            TimeUnit::Month => 5,
            TimeUnit::Year => 6,
        };
        &self.units[index]
    }
}

/// The table for a bare language code. Languages without one use English.
pub(crate) fn table_for(language: &str) -> &'static LocaleTable {
    match language {
        "de" => &GERMAN,
        "fr" => &FRENCH,
        "es" => &SPANISH,
        "ru" => &RUSSIAN,
        "pl" => &POLISH,
        "ar" => &ARABIC,
        "ja" => &JAPANESE,
        "zh" => &CHINESE,
        "ko" => &KOREAN,
        _ => &ENGLISH,
    }
}

/// Whether `language` has its own table.
pub fn has_table(language: &str) -> bool {
    matches!(
        language,
        "en" | "de" | "fr" | "es" | "ru" | "pl" | "ar" | "ja" | "zh" | "ko"
    )
}

static ENGLISH: LocaleTable = LocaleTable {
    order: WordOrder::PastSuffix,
    past: "ago",
    future: "in",
    units: [
        names(one_other("second", "seconds"), "sec.", "s"),
        names(one_other("minute", "minutes"), "min.", "m"),
        names(one_other("hour", "hours"), "hr.", "h"),
        names(one_other("day", "days"), "day", "d"),
        names(one_other("week", "weeks"), "wk.", "w"),
        names(one_other("month", "months"), "mo.", "mo"),
        names(one_other("year", "years"), "yr.", "y"),
    ],
    phrases: Phrases {
        just_now: "just now",
        today: "today",
        yesterday: "yesterday",
        tomorrow: "tomorrow",
        last_week: "last week",
        next_week: "next week",
        last_month: "last month",
        next_month: "next month",
        last_year: "last year",
        next_year: "next year",
    },
};

// Both "vor" and "in" take the dative.
static GERMAN: LocaleTable = LocaleTable {
    order: WordOrder::Prefix,
    past: "vor",
    future: "in",
    units: [
        names(one_other("Sekunde", "Sekunden"), "Sek.", "Sek."),
        names(one_other("Minute", "Minuten"), "Min.", "Min."),
        names(one_other("Stunde", "Stunden"), "Std.", "Std."),
        names(one_other("Tag", "Tagen"), "Tg.", "T."),
        names(one_other("Woche", "Wochen"), "Wo.", "W."),
        names(one_other("Monat", "Monaten"), "Mon.", "M."),
        names(one_other("Jahr", "Jahren"), "J.", "J."),
    ],
    phrases: Phrases {
        just_now: "gerade eben",
        today: "heute",
        yesterday: "gestern",
        tomorrow: "morgen",
        last_week: "letzte Woche",
        next_week: "nächste Woche",
        last_month: "letzten Monat",
        next_month: "nächsten Monat",
        last_year: "letztes Jahr",
        next_year: "nächstes Jahr",
    },
};

static FRENCH: LocaleTable = LocaleTable {
    order: WordOrder::Prefix,
    past: "il y a",
    future: "dans",
    units: [
        names(one_other("seconde", "secondes"), "s", "s"),
        names(one_other("minute", "minutes"), "min", "min"),
        names(one_other("heure", "heures"), "h", "h"),
        names(one_other("jour", "jours"), "j", "j"),
        names(one_other("semaine", "semaines"), "sem.", "sem."),
        names(one_other("mois", "mois"), "m.", "m."),
        names(one_other("an", "ans"), "a", "a"),
    ],
    phrases: Phrases {
        just_now: "à l'instant",
        today: "aujourd'hui",
        yesterday: "hier",
        tomorrow: "demain",
        last_week: "la semaine dernière",
        next_week: "la semaine prochaine",
        last_month: "le mois dernier",
        next_month: "le mois prochain",
        last_year: "l'année dernière",
        next_year: "l'année prochaine",
    },
};

static SPANISH: LocaleTable = LocaleTable {
    order: WordOrder::Prefix,
    past: "hace",
    future: "dentro de",
    units: [
        names(one_other("segundo", "segundos"), "s", "s"),
        names(one_other("minuto", "minutos"), "min", "min"),
        names(one_other("hora", "horas"), "h", "h"),
        names(one_other("día", "días"), "d", "d"),
        names(one_other("semana", "semanas"), "sem.", "sem."),
        names(one_other("mes", "meses"), "m.", "m."),
        names(one_other("año", "años"), "a", "a"),
    ],
    phrases: Phrases {
        just_now: "ahora mismo",
        today: "hoy",
        yesterday: "ayer",
        tomorrow: "mañana",
        last_week: "la semana pasada",
        next_week: "la próxima semana",
        last_month: "el mes pasado",
        next_month: "el próximo mes",
        last_year: "el año pasado",
        next_year: "el próximo año",
    },
};

// Accusative forms; "назад" and "через" agree with them.
static RUSSIAN: LocaleTable = LocaleTable {
    order: WordOrder::PastSuffix,
    past: "назад",
    future: "через",
    units: [
        names(slavic("секунду", "секунды", "секунд", "секунды"), "сек.", "с"),
        names(slavic("минуту", "минуты", "минут", "минуты"), "мин.", "мин"),
        names(slavic("час", "часа", "часов", "часа"), "ч", "ч"),
        names(slavic("день", "дня", "дней", "дня"), "дн.", "дн."),
        names(slavic("неделю", "недели", "недель", "недели"), "нед.", "нед."),
        names(slavic("месяц", "месяца", "месяцев", "месяца"), "мес.", "мес."),
        names(slavic("год", "года", "лет", "года"), "г.", "г."),
    ],
    phrases: Phrases {
        just_now: "только что",
        today: "сегодня",
        yesterday: "вчера",
        tomorrow: "завтра",
        last_week: "на прошлой неделе",
        next_week: "на следующей неделе",
        last_month: "в прошлом месяце",
        next_month: "в следующем месяце",
        last_year: "в прошлом году",
        next_year: "в следующем году",
    },
};

static POLISH: LocaleTable = LocaleTable {
    order: WordOrder::PastSuffix,
    past: "temu",
    future: "za",
    units: [
        names(slavic("sekundę", "sekundy", "sekund", "sekundy"), "sek.", "s"),
        names(slavic("minutę", "minuty", "minut", "minuty"), "min", "min"),
        names(slavic("godzinę", "godziny", "godzin", "godziny"), "godz.", "g."),
        names(slavic("dzień", "dni", "dni", "dnia"), "dni", "d."),
        names(slavic("tydzień", "tygodnie", "tygodni", "tygodnia"), "tydz.", "tydz."),
        names(slavic("miesiąc", "miesiące", "miesięcy", "miesiąca"), "mies.", "mies."),
        names(slavic("rok", "lata", "lat", "roku"), "r.", "r."),
    ],
    phrases: Phrases {
        just_now: "przed chwilą",
        today: "dzisiaj",
        yesterday: "wczoraj",
        tomorrow: "jutro",
        last_week: "w zeszłym tygodniu",
        next_week: "w przyszłym tygodniu",
        last_month: "w zeszłym miesiącu",
        next_month: "w przyszłym miesiącu",
        last_year: "w zeszłym roku",
        next_year: "w przyszłym roku",
    },
};

static ARABIC: LocaleTable = LocaleTable {
    order: WordOrder::Prefix,
    past: "قبل",
    future: "خلال",
    units: [
        names(arabic("ثانية", "ثانيتين", "ثوانٍ", "ثانية", "ثانية"), "ث", "ث"),
        names(arabic("دقيقة", "دقيقتين", "دقائق", "دقيقة", "دقيقة"), "د", "د"),
        names(arabic("ساعة", "ساعتين", "ساعات", "ساعة", "ساعة"), "س", "س"),
        names(arabic("يوم", "يومين", "أيام", "يومًا", "يوم"), "يوم", "ي"),
        names(arabic("أسبوع", "أسبوعين", "أسابيع", "أسبوعًا", "أسبوع"), "أسبوع", "أ"),
        names(arabic("شهر", "شهرين", "أشهر", "شهرًا", "شهر"), "شهر", "ش"),
        names(arabic("سنة", "سنتين", "سنوات", "سنة", "سنة"), "سنة", "سنة"),
    ],
    phrases: Phrases {
        just_now: "الآن",
        today: "اليوم",
        yesterday: "أمس",
        tomorrow: "غدًا",
        last_week: "الأسبوع الماضي",
        next_week: "الأسبوع القادم",
        last_month: "الشهر الماضي",
        next_month: "الشهر القادم",
        last_year: "السنة الماضية",
        next_year: "السنة القادمة",
    },
};

static JAPANESE: LocaleTable = LocaleTable {
    order: WordOrder::Suffix,
    past: "前",
    future: "後",
    units: [
        names(invariant("秒"), "秒", "秒"),
        names(invariant("分"), "分", "分"),
        names(invariant("時間"), "時間", "時間"),
        names(invariant("日"), "日", "日"),
        names(invariant("週間"), "週間", "週間"),
        names(invariant("か月"), "か月", "か月"),
        names(invariant("年"), "年", "年"),
    ],
    phrases: Phrases {
        just_now: "たった今",
        today: "今日",
        yesterday: "昨日",
        tomorrow: "明日",
        last_week: "先週",
        next_week: "来週",
        last_month: "先月",
        next_month: "来月",
        last_year: "昨年",
        next_year: "来年",
    },
};

static CHINESE: LocaleTable = LocaleTable {
    order: WordOrder::Suffix,
    past: "前",
    future: "后",
    units: [
        names(invariant("秒钟"), "秒", "秒"),
        names(invariant("分钟"), "分钟", "分"),
        names(invariant("小时"), "小时", "小时"),
        names(invariant("天"), "天", "天"),
        names(invariant("周"), "周", "周"),
        names(invariant("个月"), "个月", "月"),
        names(invariant("年"), "年", "年"),
    ],
    phrases: Phrases {
        just_now: "刚刚",
        today: "今天",
        yesterday: "昨天",
        tomorrow: "明天",
        last_week: "上周",
        next_week: "下周",
        last_month: "上个月",
        next_month: "下个月",
        last_year: "去年",
        next_year: "明年",
    },
};

// The markers carry their own leading space: "3일 전".
static KOREAN: LocaleTable = LocaleTable {
    order: WordOrder::Suffix,
    past: " 전",
    future: " 후",
    units: [
        names(invariant("초"), "초", "초"),
        names(invariant("분"), "분", "분"),
        names(invariant("시간"), "시간", "시간"),
        names(invariant("일"), "일", "일"),
        names(invariant("주"), "주", "주"),
        names(invariant("개월"), "개월", "개월"),
        names(invariant("년"), "년", "년"),
    ],
    phrases: Phrases {
        just_now: "방금",
        today: "오늘",
        yesterday: "어제",
        tomorrow: "내일",
        last_week: "지난주",
        next_week: "다음 주",
        last_month: "지난달",
        next_month: "다음 달",
        last_year: "작년",
        next_year: "내년",
    },
};
