//! Static message tables for the three supported locales.
//!
//! English is the base table. Arabic and Malay are overlays: keys missing
//! from an overlay resolve to the English value. Keys are stable dotted
//! identifiers consumed by the knowledge table; values are plain strings.

/// English base table. Every key the knowledge table references must exist here.
pub(super) const MESSAGES_EN: &[(&str, &str)] = &[
    // Responses
    (
        "response.bullying",
        "No one has the right to make you feel unsafe. Bullying is never your fault, \
         and telling a trusted adult is a brave first step, not tattling.",
    ),
    (
        "response.hygiene",
        "During puberty your sweat glands become more active, so body odor is \
         completely normal. A simple daily routine keeps it easy to manage.",
    ),
    (
        "response.periods",
        "Periods are a healthy, normal part of growing up. Cycles are often \
         irregular in the first couple of years, so try not to worry.",
    ),
    (
        "response.sleep",
        "Your body does a lot of its growing while you sleep. Most people your age \
         need around nine hours a night to feel their best.",
    ),
    (
        "response.nutrition",
        "Your body is growing fast and needs good fuel. Balanced meals now help \
         your bones, skin and energy for years to come.",
    ),
    (
        "response.emotions",
        "Mood swings are a normal part of puberty. Your hormones are changing \
         quickly and your feelings can change with them. It gets easier.",
    ),
    (
        "response.activities",
        "Staying active is one of the best things you can do for your changing \
         body and your mood. It should feel like play, not a chore.",
    ),
    (
        "response.family",
        "Feeling awkward about these topics is very common. Parents and guardians \
         usually want to help, and starting the conversation is the hardest part.",
    ),
    (
        "response.body",
        "Everyone goes through puberty at their own pace. The changes you are \
         noticing are a normal, healthy part of growing up.",
    ),
    (
        "response.fallback",
        "I'm not sure I understood that, but I'd love to help. Try asking about \
         body changes, feelings, hygiene, sleep, or staying active.",
    ),
    // Tips
    (
        "tip.bullying.tell-adult",
        "Tell a teacher, parent or another adult you trust as soon as you can.",
    ),
    (
        "tip.bullying.stay-together",
        "Stay near friends. Bullies usually pick on people who are alone.",
    ),
    ("tip.bullying.not-your-fault", "Remember: being bullied is never your fault."),
    ("tip.hygiene.shower", "Shower or wash daily, especially after sport."),
    ("tip.hygiene.deodorant", "Use a mild deodorant in the morning."),
    (
        "tip.hygiene.clean-clothes",
        "Put on clean clothes every day, especially socks and underwear.",
    ),
    (
        "tip.periods.track",
        "Track your cycle on a calendar so it surprises you less.",
    ),
    (
        "tip.periods.supplies",
        "Keep a small pouch with pads in your school bag, just in case.",
    ),
    (
        "tip.periods.normal",
        "Cramps are common. Warmth and gentle movement usually help.",
    ),
    (
        "tip.sleep.routine",
        "Go to bed and wake up at about the same time every day.",
    ),
    ("tip.sleep.screens", "Put screens away at least an hour before bedtime."),
    ("tip.sleep.hours", "Aim for about nine hours of sleep a night."),
    ("tip.nutrition.balanced", "Fill half your plate with fruit and vegetables."),
    (
        "tip.nutrition.water",
        "Drink water instead of sugary drinks most of the time.",
    ),
    (
        "tip.nutrition.breakfast",
        "Don't skip breakfast. Your brain needs it for school.",
    ),
    (
        "tip.emotions.name-it",
        "Naming a feeling out loud or on paper makes it smaller.",
    ),
    (
        "tip.emotions.breathe",
        "Try slow breathing: in for four counts, out for four.",
    ),
    (
        "tip.emotions.diary",
        "Writing a few lines in a diary each evening helps you spot patterns.",
    ),
    (
        "tip.activities.move",
        "Aim for at least an hour of movement you enjoy every day.",
    ),
    (
        "tip.activities.friends",
        "Activities are more fun with a friend. Invite someone along.",
    ),
    (
        "tip.family.pick-moment",
        "Pick a calm moment, like a walk or a car ride, to start talking.",
    ),
    (
        "tip.family.write-first",
        "If saying it feels hard, write your question down first.",
    ),
    (
        "tip.body.everyone-different",
        "Comparing yourself to classmates isn't fair to you. Everyone has their own timetable.",
    ),
    (
        "tip.body.ask-questions",
        "No question about your body is silly. Keep asking them.",
    ),
    ("tip.fallback.rephrase", "Try asking with different words."),
    ("tip.fallback.explore", "You can also explore the topics on the FAQ page."),
    // Resource labels
    ("resource.faq", "Frequently asked questions"),
    ("resource.games", "Games and activities"),
    ("resource.mood-diary", "Mood diary"),
    ("resource.habit-tracker", "Habit tracker"),
    ("resource.body-changes", "Understanding body changes"),
    ("resource.parents", "Guide for parents"),
    ("resource.tips", "Everyday tips"),
];

/// Arabic overlay.
pub(super) const MESSAGES_AR: &[(&str, &str)] = &[
    (
        "response.bullying",
        "لا يحق لأحد أن يجعلك تشعر بعدم الأمان. التنمر ليس خطأك أبدًا، وإخبار شخص بالغ تثق به خطوة شجاعة وليست وشاية.",
    ),
    (
        "response.hygiene",
        "خلال البلوغ تصبح الغدد العرقية أكثر نشاطًا، لذا فإن رائحة الجسم أمر طبيعي تمامًا. روتين يومي بسيط يجعل التعامل معها سهلًا.",
    ),
    (
        "response.periods",
        "الدورة الشهرية جزء طبيعي وصحي من مرحلة النمو. غالبًا ما تكون غير منتظمة في السنوات الأولى، فلا داعي للقلق.",
    ),
    (
        "response.sleep",
        "ينمو جسمك كثيرًا أثناء النوم. يحتاج معظم من هم في عمرك إلى نحو تسع ساعات من النوم كل ليلة.",
    ),
    (
        "response.nutrition",
        "جسمك ينمو بسرعة ويحتاج إلى غذاء جيد. الوجبات المتوازنة الآن تفيد عظامك وبشرتك وطاقتك لسنوات قادمة.",
    ),
    (
        "response.emotions",
        "تقلبات المزاج جزء طبيعي من البلوغ. هرموناتك تتغير بسرعة ومشاعرك تتغير معها، والأمر يصبح أسهل مع الوقت.",
    ),
    (
        "response.activities",
        "البقاء نشيطًا من أفضل ما يمكنك فعله لجسمك المتغير ومزاجك. يجب أن يكون ممتعًا كاللعب لا واجبًا ثقيلًا.",
    ),
    (
        "response.family",
        "الشعور بالحرج من هذه المواضيع شائع جدًا. الوالدان يريدان المساعدة عادةً، وبدء الحديث هو الجزء الأصعب.",
    ),
    (
        "response.body",
        "كل شخص يمر بالبلوغ بوتيرته الخاصة. التغيرات التي تلاحظها جزء طبيعي وصحي من النمو.",
    ),
    (
        "response.fallback",
        "لم أفهم سؤالك جيدًا، لكن يسعدني مساعدتك. جرّب أن تسأل عن تغيرات الجسم أو المشاعر أو النظافة أو النوم أو الأنشطة.",
    ),
    (
        "tip.bullying.tell-adult",
        "أخبر معلمًا أو أحد الوالدين أو شخصًا بالغًا تثق به في أقرب وقت.",
    ),
    (
        "tip.bullying.stay-together",
        "ابقَ قرب أصدقائك. المتنمرون يختارون عادةً من هم بمفردهم.",
    ),
    ("tip.bullying.not-your-fault", "تذكّر: التعرض للتنمر ليس خطأك أبدًا."),
    ("tip.hygiene.shower", "استحم يوميًا، خصوصًا بعد الرياضة."),
    ("tip.hygiene.deodorant", "استخدم مزيل عرق لطيفًا في الصباح."),
    (
        "tip.hygiene.clean-clothes",
        "ارتدِ ملابس نظيفة كل يوم، خصوصًا الجوارب والملابس الداخلية.",
    ),
    ("tip.periods.track", "سجّلي دورتك في تقويم حتى تفاجئك أقل."),
    (
        "tip.periods.supplies",
        "احتفظي بحقيبة صغيرة فيها فوط صحية في حقيبة المدرسة.",
    ),
    ("tip.periods.normal", "التقلصات شائعة. الدفء والحركة الخفيفة يساعدان عادةً."),
    ("tip.sleep.routine", "نم واستيقظ في الوقت نفسه تقريبًا كل يوم."),
    ("tip.sleep.screens", "ابعد الشاشات قبل النوم بساعة على الأقل."),
    ("tip.sleep.hours", "اجعل هدفك نحو تسع ساعات من النوم كل ليلة."),
    ("tip.nutrition.balanced", "املأ نصف طبقك بالفواكه والخضروات."),
    (
        "tip.nutrition.water",
        "اشرب الماء بدل المشروبات السكرية في معظم الأوقات.",
    ),
    ("tip.nutrition.breakfast", "لا تهمل الفطور. دماغك يحتاجه في المدرسة."),
    ("tip.emotions.name-it", "تسمية الشعور بصوت عالٍ أو على الورق تجعله أصغر."),
    (
        "tip.emotions.breathe",
        "جرّب التنفس البطيء: شهيق لأربع عدّات وزفير لأربع.",
    ),
    (
        "tip.emotions.diary",
        "كتابة بضعة أسطر في مذكرات كل مساء تساعدك على ملاحظة الأنماط.",
    ),
    (
        "tip.activities.move",
        "اجعل هدفك ساعة على الأقل من الحركة التي تحبها كل يوم.",
    ),
    ("tip.activities.friends", "الأنشطة أكثر متعة مع صديق. ادعُ أحدهم."),
    (
        "tip.family.pick-moment",
        "اختر لحظة هادئة، كالمشي أو ركوب السيارة، لبدء الحديث.",
    ),
    ("tip.family.write-first", "إن كان قول السؤال صعبًا، اكتبه أولًا."),
    (
        "tip.body.everyone-different",
        "مقارنة نفسك بزملائك ليست عادلة. لكل شخص جدوله الخاص.",
    ),
    ("tip.body.ask-questions", "لا يوجد سؤال سخيف عن جسمك. استمر في السؤال."),
    ("tip.fallback.rephrase", "جرّب السؤال بكلمات مختلفة."),
    (
        "tip.fallback.explore",
        "يمكنك أيضًا استكشاف المواضيع في صفحة الأسئلة الشائعة.",
    ),
    ("resource.faq", "الأسئلة الشائعة"),
    ("resource.games", "الألعاب والأنشطة"),
    ("resource.mood-diary", "مذكرات المزاج"),
    ("resource.habit-tracker", "متتبع العادات"),
    ("resource.body-changes", "فهم تغيرات الجسم"),
    ("resource.parents", "دليل الوالدين"),
    ("resource.tips", "نصائح يومية"),
];

/// Malay overlay.
pub(super) const MESSAGES_MS: &[(&str, &str)] = &[
    (
        "response.bullying",
        "Tiada sesiapa berhak membuat anda berasa tidak selamat. Dibuli bukan \
         salah anda, dan memberitahu orang dewasa yang dipercayai ialah langkah \
         pertama yang berani.",
    ),
    (
        "response.hygiene",
        "Semasa akil baligh, kelenjar peluh menjadi lebih aktif, jadi bau badan \
         adalah perkara biasa. Rutin harian yang mudah memudahkan anda mengurusnya.",
    ),
    (
        "response.periods",
        "Haid ialah sebahagian yang sihat dan normal dalam proses membesar. \
         Kitaran selalunya tidak menentu pada tahun-tahun awal, jadi jangan \
         terlalu risau.",
    ),
    (
        "response.sleep",
        "Badan anda banyak membesar semasa tidur. Kebanyakan remaja memerlukan \
         kira-kira sembilan jam tidur setiap malam.",
    ),
    (
        "response.nutrition",
        "Badan anda sedang membesar dengan cepat dan memerlukan makanan yang \
         baik. Makanan seimbang membantu tulang, kulit dan tenaga anda.",
    ),
    (
        "response.emotions",
        "Perubahan mood adalah perkara biasa semasa akil baligh. Hormon anda \
         berubah dengan cepat dan perasaan anda turut berubah. Ia akan menjadi \
         lebih mudah.",
    ),
    (
        "response.activities",
        "Kekal aktif ialah antara perkara terbaik untuk badan dan mood anda. Ia \
         patut terasa seperti bermain, bukan bebanan.",
    ),
    (
        "response.family",
        "Rasa segan tentang topik ini sangat biasa. Ibu bapa dan penjaga \
         biasanya mahu membantu. Memulakan perbualan ialah bahagian paling sukar.",
    ),
    (
        "response.body",
        "Setiap orang melalui akil baligh mengikut rentak sendiri. Perubahan \
         yang anda perasan adalah normal dan sihat.",
    ),
    (
        "response.fallback",
        "Saya kurang faham soalan itu, tetapi saya mahu membantu. Cuba tanya \
         tentang perubahan badan, perasaan, kebersihan, tidur atau aktiviti.",
    ),
    (
        "tip.bullying.tell-adult",
        "Beritahu guru, ibu bapa atau orang dewasa yang anda percayai secepat mungkin.",
    ),
    (
        "tip.bullying.stay-together",
        "Kekal bersama rakan. Pembuli biasanya memilih orang yang bersendirian.",
    ),
    ("tip.bullying.not-your-fault", "Ingat: dibuli bukan salah anda."),
    ("tip.hygiene.shower", "Mandi setiap hari, terutamanya selepas bersukan."),
    ("tip.hygiene.deodorant", "Gunakan deodoran yang lembut pada waktu pagi."),
    (
        "tip.hygiene.clean-clothes",
        "Pakai pakaian bersih setiap hari, terutamanya stokin dan pakaian dalam.",
    ),
    (
        "tip.periods.track",
        "Catat kitaran anda pada kalendar supaya ia kurang mengejutkan.",
    ),
    (
        "tip.periods.supplies",
        "Simpan beg kecil berisi tuala wanita dalam beg sekolah anda.",
    ),
    (
        "tip.periods.normal",
        "Senggugut adalah biasa. Kehangatan dan pergerakan ringan selalunya membantu.",
    ),
    (
        "tip.sleep.routine",
        "Tidur dan bangun pada waktu yang lebih kurang sama setiap hari.",
    ),
    (
        "tip.sleep.screens",
        "Jauhkan skrin sekurang-kurangnya sejam sebelum tidur.",
    ),
    ("tip.sleep.hours", "Sasarkan kira-kira sembilan jam tidur setiap malam."),
    (
        "tip.nutrition.balanced",
        "Isi separuh pinggan anda dengan buah-buahan dan sayur-sayuran.",
    ),
    ("tip.nutrition.water", "Minum air kosong, bukan minuman manis."),
    (
        "tip.nutrition.breakfast",
        "Jangan tinggalkan sarapan. Otak anda memerlukannya di sekolah.",
    ),
    (
        "tip.emotions.name-it",
        "Menamakan perasaan secara lisan atau bertulis membuatkannya terasa lebih kecil.",
    ),
    (
        "tip.emotions.breathe",
        "Cuba pernafasan perlahan: tarik empat kiraan, hembus empat kiraan.",
    ),
    (
        "tip.emotions.diary",
        "Menulis beberapa baris dalam diari setiap malam membantu anda nampak corak.",
    ),
    (
        "tip.activities.move",
        "Sasarkan sekurang-kurangnya sejam pergerakan yang anda suka setiap hari.",
    ),
    (
        "tip.activities.friends",
        "Aktiviti lebih seronok bersama rakan. Ajak seseorang.",
    ),
    (
        "tip.family.pick-moment",
        "Pilih waktu yang tenang, seperti semasa berjalan, untuk mula berbual.",
    ),
    (
        "tip.family.write-first",
        "Jika sukar menyebutnya, tulis soalan anda dahulu.",
    ),
    (
        "tip.body.everyone-different",
        "Membandingkan diri dengan rakan sekelas tidak adil untuk anda. Setiap \
         orang ada jadualnya sendiri.",
    ),
    (
        "tip.body.ask-questions",
        "Tiada soalan tentang badan anda yang bodoh. Teruskan bertanya.",
    ),
    ("tip.fallback.rephrase", "Cuba tanya dengan perkataan lain."),
    (
        "tip.fallback.explore",
        "Anda juga boleh meneroka topik di halaman soalan lazim.",
    ),
    ("resource.faq", "Soalan lazim"),
    ("resource.games", "Permainan dan aktiviti"),
    ("resource.mood-diary", "Diari mood"),
    ("resource.habit-tracker", "Penjejak tabiat"),
    ("resource.body-changes", "Memahami perubahan badan"),
    ("resource.parents", "Panduan untuk ibu bapa"),
    ("resource.tips", "Petua harian"),
];
