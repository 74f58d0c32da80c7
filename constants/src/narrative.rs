/// One caption panel entry: body text, the era label shown in the
/// time readout, and an optional tooltip line.
pub struct Caption {
    pub body: &'static str,
    pub time_label: &'static str,
    pub tooltip: Option<&'static str>,
}

pub const TITLE_TEXT: &str = "The Journey of the Universe\nby Yanfu";
pub const CREDITS_TEXT: &str = "The End";

pub const INTRO: Caption = Caption {
    body: "",
    time_label: "Scroll to begin!",
    tooltip: None,
};

pub const SINGULARITY: Caption = Caption {
    body: "At the beginning, the universe was squished into an infinitely hot \
           and dense point, so small that you can't even see it with a \
           microscope, called The Singularity. We don't know what happened \
           before then, but this is where our journey begins.",
    time_label: "Start of time",
    tooltip: None,
};

pub const INFLATION: Caption = Caption {
    body: "Suddenly, The Singularity started to grow bigger and bigger, like \
           how you blow a balloon. This process is called Cosmic Expansion. \
           It grew so fast that the universe was over 1 billion billion \
           trillion times bigger than before in less than a second.",
    time_label: "10^-43 to 10^-35 seconds",
    tooltip: Some(
        "0 to one hundreth of a billionth of a trillionth of a trillionth of a second",
    ),
};

pub const COOLING: Caption = Caption {
    body: "Think of a box of bouncing marbles. If the box is bigger, then the \
           marbles have more space to bounce. Now, imagine energy as the \
           marbles and the universe as the box. As the universe becomes \
           bigger, energy is less packed together, so the temperature becomes \
           colder. But it is still too hot for anything to form.",
    time_label: "10^-35 to 10^-6 seconds",
    tooltip: None,
};

pub const PARTICLES: Caption = Caption {
    body: "Now, the universe is finally cool enough for some things to form. \
           The first objects to form are protons, neutrons and electrons, \
           which make up an atom. But it is still too hot for the atom to \
           form!",
    time_label: "10^-6 to 1 second",
    tooltip: None,
};

pub const NUCLEI: Caption = Caption {
    body: "The temperature is now low enough for the first nuclei to form. \
           Think of protons, neutrons and electrons as lego blocks. A nucleus \
           is the lego structure formed when you place at least one proton \
           block (optionally with some more protons and neutrons) on the base \
           plate.",
    time_label: "3 minutes to 20 minutes",
    tooltip: Some("These particles will form atoms."),
};

pub const ATOMS: Caption = Caption {
    body: "Now, the temperature is low enough for the first atoms to form. \
           Thinking of lego blocks again, an atom is what you get when you \
           place an electron lego block on a nucleus structure.",
    time_label: "20 minutes to 380,000 years",
    tooltip: Some("These particles will form atoms."),
};

pub const CMBR: Caption = Caption {
    body: "The universe is quite cool now. Because it isn't that hot, and \
           atoms don't emit light, the universe became transparent, without \
           much light. The only light back then was in the form of a thing \
           called Cosmic Microwave Background Radiation, which we can see \
           today! This remains a very important evidence of the Big Bang.",
    time_label: "380,000 years to 150 million years",
    tooltip: Some(
        "The universe is now transparent, and the only light is the Cosmic Background Radiation.",
    ),
};

pub const DARK_AGES: Caption = Caption {
    body: "Since it was very dark, this part of the universe was called the \
           Dark Ages. But it was also an age of change; gravity, which is the \
           force that causes things to fall, caused atoms to come together \
           into heavy clumps. Eventually, these clumps of atoms\u{2026}",
    time_label: "380,000 years to 150 million years",
    tooltip: None,
};

pub const STARS_AND_GALAXIES: Caption = Caption {
    body: "\u{2026} formed stars and galaxies! These stars and galaxies are \
           the building blocks of the universe that we see today. They are \
           made of the same atoms that were formed earlier, but they crash \
           together in the stars to make light. This light is what we see \
           when we look into the night sky.",
    time_label: "150 million years to present",
    tooltip: None,
};

pub const REDSHIFT: Caption = Caption {
    body: "As stars and galaxies move away from us, their light becomes \
           redder than it really is. This is called Redshift. The further \
           away something is, the more red shifted it is. Most stars and \
           galaxies are redshifted, meaning that they are moving away from \
           us, telling us that the universe is still expanding.",
    time_label: "150 million years to present",
    tooltip: None,
};

pub const BIG_RIP: Caption = Caption {
    body: "Maybe the universe will continue to expand forever. This theory is \
           called the Big Rip theory.",
    time_label: "The Future?",
    tooltip: None,
};

pub const BIG_CRUNCH: Caption = Caption {
    body: "Or maybe gravity will cause everything to come back together into \
           another Singularity, and that Singularity may explode again into a \
           new universe. This is called the Big Crunch and Big Bounce theory.",
    time_label: "The Future?",
    tooltip: None,
};

pub const PRESENT: Caption = Caption {
    body: "Ultimately, we don't know what will happen in the future. But we \
           do know that the universe has come a long way since the beginning. \
           It has been a journey of change, growth, and discovery. And it is \
           a journey that we are still on today.",
    time_label: "The Present",
    tooltip: None,
};

pub const CREDITS: Caption = Caption {
    body: "Thank you for joining me on this journey through the universe.\n\
           I hope you enjoyed the ride!\n\
           - Yanfu\n\
           (P.S. reload the page to start again)",
    time_label: "The End",
    tooltip: None,
};
