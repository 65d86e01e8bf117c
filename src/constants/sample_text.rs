/// Bundled fallback text used when the remote API cannot be reached.
/// Coverage is intentionally partial: Al-Fatiha only.
pub const SAMPLE_AYAHS: [(u16, u16, &str); 7] = [
    (1, 1, "بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ"),
    (1, 2, "الْحَمْدُ لِلَّهِ رَبِّ الْعَالَمِينَ"),
    (1, 3, "الرَّحْمَٰنِ الرَّحِيمِ"),
    (1, 4, "مَالِكِ يَوْمِ الدِّينِ"),
    (1, 5, "إِيَّاكَ نَعْبُدُ وَإِيَّاكَ نَسْتَعِينُ"),
    (1, 6, "اهْدِنَا الصِّرَاطَ الْمُسْتَقِيمَ"),
    (
        1,
        7,
        "صِرَاطَ الَّذِينَ أَنْعَمْتَ عَلَيْهِمْ غَيْرِ الْمَغْضُوبِ عَلَيْهِمْ وَلَا الضَّالِّينَ",
    ),
];
