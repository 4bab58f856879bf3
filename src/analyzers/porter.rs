//! The Porter (1980) suffix-stripping stemmer.
//!
//! Follows the published five-step algorithm with the common extensions used
//! by NLTK's default `PorterStemmer` mode:
//!
//! - a handful of irregular forms are mapped directly (`dying` -> `die`),
//! - words of one or two characters are returned unchanged,
//! - four-letter `-ies`/`-ied` words keep their `ie` (`ties` -> `tie`),
//! - `y` -> `i` needs a consonant before it rather than any vowel in the stem,
//! - `bli` -> `ble`, `fulli` -> `ful` and `logi` -> `log` in step 2.
//!
//! Letters other than `a e i o u` (and `y` after a vowel) count as consonants.

type Condition<'a> = &'a dyn Fn(&str) -> bool;
type Rule<'a> = (&'static str, &'static str, Option<Condition<'a>>);

const IRREGULAR: &[(&str, &str)] = &[
  ("sky", "sky"),
  ("skies", "sky"),
  ("dying", "die"),
  ("lying", "lie"),
  ("tying", "tie"),
  ("news", "news"),
  ("innings", "inning"),
  ("inning", "inning"),
  ("outings", "outing"),
  ("outing", "outing"),
  ("cannings", "canning"),
  ("canning", "canning"),
  ("howe", "howe"),
  ("proceed", "proceed"),
  ("exceed", "exceed"),
  ("succeed", "succeed"),
];

/// A Porter stemmer. Holds no state; build one wherever it is needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
  pub fn new() -> Self {
    Self
  }

  /// Lowercases `word` and reduces it to its stem.
  pub fn stem(&self, word: &str) -> String {
    let word = word.to_lowercase();

    if let Some(&(_, base)) = IRREGULAR.iter().find(|(form, _)| *form == word) {
      return base.to_string();
    }
    if word.chars().count() <= 2 {
      return word;
    }

    let word = step1a(&word);
    let word = step1b(&word);
    let word = step1c(&word);
    let word = step2(&word);
    let word = step3(&word);
    let word = step4(&word);
    let word = step5a(&word);
    step5b(&word)
  }
}

fn is_consonant(word: &[char], i: usize) -> bool {
  match word[i] {
    'a' | 'e' | 'i' | 'o' | 'u' => false,
    'y' if i == 0 => true,
    'y' => !is_consonant(word, i - 1),
    _ => true,
  }
}

/// Number of vowel-consonant sequences, the `m` in `[C](VC)^m[V]`.
fn measure(stem: &str) -> usize {
  let chars: Vec<char> = stem.chars().collect();
  let kinds: Vec<bool> = (0..chars.len()).map(|i| is_consonant(&chars, i)).collect();
  kinds.windows(2).filter(|pair| !pair[0] && pair[1]).count()
}

fn contains_vowel(stem: &str) -> bool {
  let chars: Vec<char> = stem.chars().collect();
  (0..chars.len()).any(|i| !is_consonant(&chars, i))
}

fn ends_double_consonant(word: &str) -> bool {
  let chars: Vec<char> = word.chars().collect();
  let n = chars.len();
  n >= 2 && chars[n - 1] == chars[n - 2] && is_consonant(&chars, n - 1)
}

// consonant-vowel-consonant, the last not w, x or y; or a two-letter
// vowel-consonant word.
fn ends_cvc(word: &str) -> bool {
  let chars: Vec<char> = word.chars().collect();
  let n = chars.len();
  let classic = n >= 3
    && is_consonant(&chars, n - 3)
    && !is_consonant(&chars, n - 2)
    && is_consonant(&chars, n - 1)
    && !matches!(chars[n - 1], 'w' | 'x' | 'y');
  let short = n == 2 && !is_consonant(&chars, 0) && is_consonant(&chars, 1);
  classic || short
}

// The first rule whose suffix matches decides: it either rewrites the word or
// leaves it untouched.
fn apply_rules(word: &str, rules: &[Rule]) -> String {
  for &(suffix, replacement, condition) in rules {
    if let Some(stem) = word.strip_suffix(suffix) {
      return match condition {
        Some(holds) if !holds(stem) => word.to_string(),
        _ => format!("{stem}{replacement}"),
      };
    }
  }
  word.to_string()
}

fn positive_measure(stem: &str) -> bool {
  measure(stem) > 0
}

fn measure_above_one(stem: &str) -> bool {
  measure(stem) > 1
}

fn step1a(word: &str) -> String {
  if word.ends_with("ies") && word.chars().count() == 4 {
    return format!("{}ie", &word[..word.len() - 3]);
  }
  apply_rules(
    word,
    &[
      ("sses", "ss", None),
      ("ies", "i", None),
      ("ss", "ss", None),
      ("s", "", None),
    ],
  )
}

fn step1b(word: &str) -> String {
  if let Some(stem) = word.strip_suffix("ied") {
    let keep_ie = word.chars().count() == 4;
    return format!("{stem}{}", if keep_ie { "ie" } else { "i" });
  }
  if let Some(stem) = word.strip_suffix("eed") {
    return if measure(stem) > 0 {
      format!("{stem}ee")
    } else {
      word.to_string()
    };
  }

  let Some(stem) = ["ed", "ing"]
    .iter()
    .filter_map(|suffix| word.strip_suffix(*suffix))
    .find(|stem| contains_vowel(stem))
  else {
    return word.to_string();
  };

  for (suffix, replacement) in [("at", "ate"), ("bl", "ble"), ("iz", "ize")] {
    if let Some(base) = stem.strip_suffix(suffix) {
      return format!("{base}{replacement}");
    }
  }
  if ends_double_consonant(stem) {
    return if stem.ends_with(['l', 's', 'z']) {
      stem.to_string()
    } else {
      let mut shortened = stem.to_string();
      shortened.pop();
      shortened
    };
  }
  if measure(stem) == 1 && ends_cvc(stem) {
    return format!("{stem}e");
  }
  stem.to_string()
}

fn step1c(word: &str) -> String {
  let consonant_before: Condition = &|stem: &str| {
    let chars: Vec<char> = stem.chars().collect();
    chars.len() > 1 && is_consonant(&chars, chars.len() - 1)
  };
  apply_rules(word, &[("y", "i", Some(consonant_before))])
}

fn step2(word: &str) -> String {
  // alli -> al runs first and feeds its result back through this step.
  if let Some(stem) = word.strip_suffix("alli") {
    if positive_measure(stem) {
      return step2(&format!("{stem}al"));
    }
  }

  let positive: Condition = &positive_measure;
  // The l of logi stays with the stem, so short stems like "geo" qualify.
  let logi: Condition = &|_: &str| positive_measure(&word[..word.len() - 3]);

  apply_rules(
    word,
    &[
      ("ational", "ate", Some(positive)),
      ("tional", "tion", Some(positive)),
      ("enci", "ence", Some(positive)),
      ("anci", "ance", Some(positive)),
      ("izer", "ize", Some(positive)),
      ("bli", "ble", Some(positive)),
      ("alli", "al", Some(positive)),
      ("entli", "ent", Some(positive)),
      ("eli", "e", Some(positive)),
      ("ousli", "ous", Some(positive)),
      ("ization", "ize", Some(positive)),
      ("ation", "ate", Some(positive)),
      ("ator", "ate", Some(positive)),
      ("alism", "al", Some(positive)),
      ("iveness", "ive", Some(positive)),
      ("fulness", "ful", Some(positive)),
      ("ousness", "ous", Some(positive)),
      ("aliti", "al", Some(positive)),
      ("iviti", "ive", Some(positive)),
      ("biliti", "ble", Some(positive)),
      ("fulli", "ful", Some(positive)),
      ("logi", "log", Some(logi)),
    ],
  )
}

fn step3(word: &str) -> String {
  let positive: Condition = &positive_measure;
  apply_rules(
    word,
    &[
      ("icate", "ic", Some(positive)),
      ("ative", "", Some(positive)),
      ("alize", "al", Some(positive)),
      ("iciti", "ic", Some(positive)),
      ("ical", "ic", Some(positive)),
      ("ful", "", Some(positive)),
      ("ness", "", Some(positive)),
    ],
  )
}

fn step4(word: &str) -> String {
  let above_one: Condition = &measure_above_one;
  let ion: Condition = &|stem: &str| measure_above_one(stem) && stem.ends_with(['s', 't']);
  apply_rules(
    word,
    &[
      ("al", "", Some(above_one)),
      ("ance", "", Some(above_one)),
      ("ence", "", Some(above_one)),
      ("er", "", Some(above_one)),
      ("ic", "", Some(above_one)),
      ("able", "", Some(above_one)),
      ("ible", "", Some(above_one)),
      ("ant", "", Some(above_one)),
      ("ement", "", Some(above_one)),
      ("ment", "", Some(above_one)),
      ("ent", "", Some(above_one)),
      ("ion", "", Some(ion)),
      ("ou", "", Some(above_one)),
      ("ism", "", Some(above_one)),
      ("ate", "", Some(above_one)),
      ("iti", "", Some(above_one)),
      ("ous", "", Some(above_one)),
      ("ive", "", Some(above_one)),
      ("ize", "", Some(above_one)),
    ],
  )
}

fn step5a(word: &str) -> String {
  if let Some(stem) = word.strip_suffix('e') {
    let m = measure(stem);
    if m > 1 || (m == 1 && !ends_cvc(stem)) {
      return stem.to_string();
    }
  }
  word.to_string()
}

fn step5b(word: &str) -> String {
  if word.ends_with("ll") && measure(&word[..word.len() - 1]) > 1 {
    return word[..word.len() - 1].to_string();
  }
  word.to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn stem(word: &str) -> String {
    PorterStemmer::new().stem(word)
  }

  #[test]
  fn test_step1_plurals_and_participles() {
    let cases = [
      ("caresses", "caress"),
      ("ponies", "poni"),
      ("ties", "tie"),
      ("cats", "cat"),
      ("feed", "feed"),
      ("agreed", "agre"),
      ("plastered", "plaster"),
      ("motoring", "motor"),
      ("sing", "sing"),
      ("conflated", "conflat"),
      ("hopping", "hop"),
      ("falling", "fall"),
      ("filing", "file"),
      ("running", "run"),
    ];
    for (word, expected) in cases {
      assert_eq!(stem(word), expected, "stem({word})");
    }
  }

  #[test]
  fn test_y_becomes_i_after_consonant() {
    assert_eq!(stem("quickly"), "quickli");
    assert_eq!(stem("fairly"), "fairli");
    assert_eq!(stem("economy"), "economi");
    assert_eq!(stem("happy"), "happi");
    assert_eq!(stem("play"), "play");
  }

  #[test]
  fn test_derivational_suffixes() {
    assert_eq!(stem("generous"), "gener");
    assert_eq!(stem("relational"), "relat");
    assert_eq!(stem("generalization"), "gener");
    assert_eq!(stem("hopeful"), "hope");
    assert_eq!(stem("goodness"), "good");
    assert_eq!(stem("adjustment"), "adjust");
  }

  #[test]
  fn test_irregular_and_short_words() {
    assert_eq!(stem("dying"), "die");
    assert_eq!(stem("skies"), "sky");
    assert_eq!(stem("news"), "news");
    assert_eq!(stem("is"), "is");
    assert_eq!(stem("the"), "the");
  }

  #[test]
  fn test_lowercases_input() {
    assert_eq!(stem("Running"), "run");
  }

  #[test]
  fn test_measure() {
    assert_eq!(measure("tr"), 0);
    assert_eq!(measure("tree"), 0);
    assert_eq!(measure("trouble"), 1);
    assert_eq!(measure("oaten"), 2);
    assert_eq!(measure("private"), 2);
  }
}
