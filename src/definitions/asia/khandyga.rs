// Generated from the IANA time zone database. Do not edit by hand.

use crate::{TimezoneOffset, Transition, TransitionInstant, TransitionTable};

static OFFSETS: [TimezoneOffset; 9] = [
    TimezoneOffset::new(32533, 0, "LMT"),
    TimezoneOffset::new(28800, 0, "YAKT"),
    TimezoneOffset::new(32400, 0, "YAKT"),
    TimezoneOffset::new(32400, 3600, "YAKST"),
    TimezoneOffset::new(28800, 3600, "YAKST"),
    TimezoneOffset::new(36000, 0, "VLAT"),
    TimezoneOffset::new(36000, 3600, "VLAST"),
    TimezoneOffset::new(39600, 0, "VLAT"),
    TimezoneOffset::new(36000, 0, "YAKT"),
];

static TRANSITIONS: [Transition; 67] = [
    Transition::new(TransitionInstant::from_julian(209287335467, 86400), 1), // 1919-12
    Transition::new(TransitionInstant::from_julian(14556889, 6), 2), // 1930-06
    Transition::new(TransitionInstant::from_timestamp(354898800), 3), // 1981-03
    Transition::new(TransitionInstant::from_timestamp(370706400), 2), // 1981-09
    Transition::new(TransitionInstant::from_timestamp(386434800), 3), // 1982-03
    Transition::new(TransitionInstant::from_timestamp(402242400), 2), // 1982-09
    Transition::new(TransitionInstant::from_timestamp(417970800), 3), // 1983-03
    Transition::new(TransitionInstant::from_timestamp(433778400), 2), // 1983-09
    Transition::new(TransitionInstant::from_timestamp(449593200), 3), // 1984-03
    Transition::new(TransitionInstant::from_timestamp(465325200), 2), // 1984-09
    Transition::new(TransitionInstant::from_timestamp(481050000), 3), // 1985-03
    Transition::new(TransitionInstant::from_timestamp(496774800), 2), // 1985-09
    Transition::new(TransitionInstant::from_timestamp(512499600), 3), // 1986-03
    Transition::new(TransitionInstant::from_timestamp(528224400), 2), // 1986-09
    Transition::new(TransitionInstant::from_timestamp(543949200), 3), // 1987-03
    Transition::new(TransitionInstant::from_timestamp(559674000), 2), // 1987-09
    Transition::new(TransitionInstant::from_timestamp(575398800), 3), // 1988-03
    Transition::new(TransitionInstant::from_timestamp(591123600), 2), // 1988-09
    Transition::new(TransitionInstant::from_timestamp(606848400), 3), // 1989-03
    Transition::new(TransitionInstant::from_timestamp(622573200), 2), // 1989-09
    Transition::new(TransitionInstant::from_timestamp(638298000), 3), // 1990-03
    Transition::new(TransitionInstant::from_timestamp(654627600), 2), // 1990-09
    Transition::new(TransitionInstant::from_timestamp(670352400), 4), // 1991-03
    Transition::new(TransitionInstant::from_timestamp(686080800), 1), // 1991-09
    Transition::new(TransitionInstant::from_timestamp(695757600), 2), // 1992-01
    Transition::new(TransitionInstant::from_timestamp(701802000), 3), // 1992-03
    Transition::new(TransitionInstant::from_timestamp(717526800), 2), // 1992-09
    Transition::new(TransitionInstant::from_timestamp(733251600), 3), // 1993-03
    Transition::new(TransitionInstant::from_timestamp(748976400), 2), // 1993-09
    Transition::new(TransitionInstant::from_timestamp(764701200), 3), // 1994-03
    Transition::new(TransitionInstant::from_timestamp(780426000), 2), // 1994-09
    Transition::new(TransitionInstant::from_timestamp(796150800), 3), // 1995-03
    Transition::new(TransitionInstant::from_timestamp(811875600), 2), // 1995-09
    Transition::new(TransitionInstant::from_timestamp(828205200), 3), // 1996-03
    Transition::new(TransitionInstant::from_timestamp(846349200), 2), // 1996-10
    Transition::new(TransitionInstant::from_timestamp(859654800), 3), // 1997-03
    Transition::new(TransitionInstant::from_timestamp(877798800), 2), // 1997-10
    Transition::new(TransitionInstant::from_timestamp(891104400), 3), // 1998-03
    Transition::new(TransitionInstant::from_timestamp(909248400), 2), // 1998-10
    Transition::new(TransitionInstant::from_timestamp(922554000), 3), // 1999-03
    Transition::new(TransitionInstant::from_timestamp(941302800), 2), // 1999-10
    Transition::new(TransitionInstant::from_timestamp(954003600), 3), // 2000-03
    Transition::new(TransitionInstant::from_timestamp(972752400), 2), // 2000-10
    Transition::new(TransitionInstant::from_timestamp(985453200), 3), // 2001-03
    Transition::new(TransitionInstant::from_timestamp(1004202000), 2), // 2001-10
    Transition::new(TransitionInstant::from_timestamp(1017507600), 3), // 2002-03
    Transition::new(TransitionInstant::from_timestamp(1035651600), 2), // 2002-10
    Transition::new(TransitionInstant::from_timestamp(1048957200), 3), // 2003-03
    Transition::new(TransitionInstant::from_timestamp(1067101200), 2), // 2003-10
    Transition::new(TransitionInstant::from_timestamp(1072882800), 5), // 2003-12
    Transition::new(TransitionInstant::from_timestamp(1080403200), 6), // 2004-03
    Transition::new(TransitionInstant::from_timestamp(1099152000), 5), // 2004-10
    Transition::new(TransitionInstant::from_timestamp(1111852800), 6), // 2005-03
    Transition::new(TransitionInstant::from_timestamp(1130601600), 5), // 2005-10
    Transition::new(TransitionInstant::from_timestamp(1143302400), 6), // 2006-03
    Transition::new(TransitionInstant::from_timestamp(1162051200), 5), // 2006-10
    Transition::new(TransitionInstant::from_timestamp(1174752000), 6), // 2007-03
    Transition::new(TransitionInstant::from_timestamp(1193500800), 5), // 2007-10
    Transition::new(TransitionInstant::from_timestamp(1206806400), 6), // 2008-03
    Transition::new(TransitionInstant::from_timestamp(1224950400), 5), // 2008-10
    Transition::new(TransitionInstant::from_timestamp(1238256000), 6), // 2009-03
    Transition::new(TransitionInstant::from_timestamp(1256400000), 5), // 2009-10
    Transition::new(TransitionInstant::from_timestamp(1269705600), 6), // 2010-03
    Transition::new(TransitionInstant::from_timestamp(1288454400), 5), // 2010-10
    Transition::new(TransitionInstant::from_timestamp(1301155200), 7), // 2011-03
    Transition::new(TransitionInstant::from_timestamp(1315832400), 8), // 2011-09
    Transition::new(TransitionInstant::from_timestamp(1414252800), 2), // 2014-10
];

pub static ASIA_KHANDYGA: TransitionTable =
    TransitionTable::from_static("Asia/Khandyga", &OFFSETS, &TRANSITIONS);
