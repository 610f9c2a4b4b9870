//! The canonical dialing table.
//!
//! Order matters: it is the directory order used for tie-breaking and for the
//! unfiltered country list.

use crate::country::{Country, country, ranked, with_area_codes};

const CA_AREA_CODES: &[&str] = &[
    "204", "226", "236", "249", "250", "289", "306", "343", "365", "387",
    "403", "416", "418", "431", "437", "438", "450", "506", "514", "519",
    "548", "579", "581", "587", "604", "613", "639", "647", "672", "705",
    "709", "742", "778", "780", "782", "807", "819", "825", "867", "873",
    "902", "905",
];

const DO_AREA_CODES: &[&str] = &[
    "809", "829", "849",
];

const PR_AREA_CODES: &[&str] = &[
    "787", "939",
];

const US_AREA_CODES: &[&str] = &[
    "201", "202", "203", "205", "206", "207", "208", "209", "210", "212",
    "213", "214", "215", "216", "217", "218", "219", "220", "224", "225",
    "228", "229", "231", "234", "239", "240", "248", "251", "252", "253",
    "254", "256", "260", "262", "267", "269", "270", "272", "276", "281",
    "283", "301", "302", "303", "304", "305", "307", "308", "309", "310",
    "312", "313", "314", "315", "316", "317", "318", "319", "320", "321",
    "323", "325", "330", "331", "334", "336", "337", "339", "346", "347",
    "351", "352", "360", "361", "364", "380", "385", "386", "401", "402",
    "404", "405", "406", "407", "408", "409", "410", "412", "413", "414",
    "415", "417", "419", "423", "424", "425", "430", "432", "434", "435",
    "440", "442", "443", "447", "458", "469", "470", "475", "478", "479",
    "480", "484", "501", "502", "503", "504", "505", "507", "508", "509",
    "510", "512", "513", "515", "516", "517", "518", "520", "530", "531",
    "534", "539", "540", "541", "551", "559", "561", "562", "563", "564",
    "567", "570", "571", "573", "574", "575", "580", "585", "586", "601",
    "602", "603", "605", "606", "607", "608", "609", "610", "612", "614",
    "615", "616", "617", "618", "619", "620", "623", "626", "628", "629",
    "630", "631", "636", "641", "646", "650", "651", "657", "660", "661",
    "662", "667", "669", "678", "680", "681", "682", "684", "689", "701",
    "702", "703", "704", "706", "707", "708", "712", "713", "714", "715",
    "716", "717", "718", "719", "720", "724", "725", "727", "731", "732",
    "734", "737", "740", "743", "747", "754", "757", "760", "762", "763",
    "765", "769", "770", "772", "773", "774", "775", "779", "781", "785",
    "786", "801", "802", "803", "804", "805", "806", "808", "810", "812",
    "813", "814", "815", "816", "817", "818", "828", "830", "831", "832",
    "843", "845", "847", "848", "850", "854", "856", "857", "858", "859",
    "860", "862", "863", "864", "865", "870", "872", "878", "901", "903",
    "904", "906", "907", "908", "909", "910", "912", "913", "914", "915",
    "916", "917", "918", "919", "920", "925", "928", "929", "930", "931",
    "934", "936", "937", "938", "940", "941", "947", "949", "951", "952",
    "954", "956", "959", "970", "971", "972", "973", "975", "978", "979",
    "980", "984", "985", "989",
];

pub(crate) static COUNTRIES: [Country; 242] = [
    country("Afghanistan", "AF", "93", "+.. .. ... ...."),
    country("Albania", "AL", "355", "+... .. ... ...."),
    country("Algeria", "DZ", "213", "+... .. ... ...."),
    country("American Samoa", "AS", "1684", "+. (...) ...-...."),
    country("Andorra", "AD", "376", "+... ... ..."),
    country("Angola", "AO", "244", "+... ... ... ..."),
    country("Anguilla", "AI", "1264", "+. (...) ...-...."),
    country("Antigua and Barbuda", "AG", "1268", "+. (...) ...-...."),
    country("Argentina", "AR", "54", "+.. .. ....-....."),
    country("Armenia", "AM", "374", "+... .. ......"),
    country("Aruba", "AW", "297", "+... ... ...."),
    country("Australia", "AU", "61", "+.. ... ... ..."),
    country("Austria", "AT", "43", "+.. ... ......."),
    country("Azerbaijan", "AZ", "994", "+... .. ... .. .."),
    country("Bahamas", "BS", "1242", "+. (...) ...-...."),
    country("Bahrain", "BH", "973", "+... .... ...."),
    country("Bangladesh", "BD", "880", "+... ....-......"),
    country("Barbados", "BB", "1246", "+. (...) ...-...."),
    country("Belarus", "BY", "375", "+... .. ... .. .."),
    country("Belgium", "BE", "32", "+.. ... .. .. .."),
    country("Belize", "BZ", "501", "+... ...-...."),
    country("Benin", "BJ", "229", "+... .. .. .. .."),
    country("Bermuda", "BM", "1441", "+. (...) ...-...."),
    country("Bhutan", "BT", "975", "+... .. .. .. .."),
    country("Bolivia", "BO", "591", "+... .-...-...."),
    country("Bosnia and Herzegovina", "BA", "387", "+... .. ...-...."),
    country("Botswana", "BW", "267", "+... .. ... ..."),
    country("Brazil", "BR", "55", "+.. .. .....-....."),
    country("British Indian Ocean Territory", "IO", "246", "+... ... ...."),
    country("British Virgin Islands", "VG", "1284", "+. (...) ...-...."),
    country("Brunei", "BN", "673", "+... ... ...."),
    country("Bulgaria", "BG", "359", "+... . ... ...."),
    country("Burkina Faso", "BF", "226", "+... .. .. .. .."),
    country("Burundi", "BI", "257", "+... .. .. .. .."),
    country("Cambodia", "KH", "855", "+... .. ... ..."),
    country("Cameroon", "CM", "237", "+... .... ...."),
    with_area_codes("Canada", "CA", "1", 1, "+. (...) ...-....", CA_AREA_CODES),
    country("Cape Verde", "CV", "238", "+... ... .. .."),
    ranked("Caribbean Netherlands", "BQ", "599", 1, "+... ... ...."),
    country("Cayman Islands", "KY", "1345", "+. (...) ...-...."),
    country("Central African Republic", "CF", "236", "+... .. .. .. .."),
    country("Chad", "TD", "235", "+... .. .. .. .."),
    country("Chile", "CL", "56", "+.. . .... ...."),
    country("China", "CN", "86", "+.. ... .... ...."),
    ranked("Christmas Island", "CX", "61", 2, "+.. . .... ...."),
    ranked("Cocos (Keeling) Islands", "CC", "61", 3, "+.. . .... ...."),
    country("Colombia", "CO", "57", "+.. ... ... ...."),
    country("Comoros", "KM", "269", "+... ... .. .."),
    country("Congo (DRC)", "CD", "243", "+... .. ... ...."),
    country("Congo (Republic)", "CG", "242", "+... .. ... ...."),
    country("Cook Islands", "CK", "682", "+... .. ..."),
    country("Costa Rica", "CR", "506", "+... ....-...."),
    country("Croatia", "HR", "385", "+... .. ... ...."),
    country("Cuba", "CU", "53", "+.. . ... ...."),
    country("Curaçao", "CW", "599", "+... . ... ...."),
    country("Cyprus", "CY", "357", "+... .. ......"),
    country("Czech Republic", "CZ", "420", "+... ... ... ..."),
    country("Denmark", "DK", "45", "+.. .. .. .. .."),
    country("Djibouti", "DJ", "253", "+... .. .. .. .."),
    country("Dominica", "DM", "1767", "+. (...) ...-...."),
    with_area_codes("Dominican Republic", "DO", "1", 2, "+. (...) ...-....", DO_AREA_CODES),
    country("Ecuador", "EC", "593", "+... .. ... ...."),
    country("Egypt", "EG", "20", "+.. ... ... ...."),
    country("El Salvador", "SV", "503", "+... .... ...."),
    country("Equatorial Guinea", "GQ", "240", "+... ... ... ..."),
    country("Eritrea", "ER", "291", "+... . ... ..."),
    country("Estonia", "EE", "372", "+... .... ...."),
    country("Eswatini", "SZ", "268", "+... .... ...."),
    country("Ethiopia", "ET", "251", "+... .. ... ...."),
    country("Falkland Islands", "FK", "500", "+... ....."),
    country("Faroe Islands", "FO", "298", "+... ......"),
    country("Fiji", "FJ", "679", "+... ... ...."),
    country("Finland", "FI", "358", "+... .. ... .. .."),
    country("France", "FR", "33", "+.. . .. .. .. .."),
    country("French Guiana", "GF", "594", "+... ... .. .. .."),
    country("French Polynesia", "PF", "689", "+... .. .. .. .."),
    country("Gabon", "GA", "241", "+... .. .. .. .."),
    country("Gambia", "GM", "220", "+... ... ...."),
    country("Georgia", "GE", "995", "+... ... ... ..."),
    country("Germany", "DE", "49", "+.. ... ........"),
    country("Ghana", "GH", "233", "+... .. ... ...."),
    country("Gibraltar", "GI", "350", "+... ... ....."),
    country("Greece", "GR", "30", "+.. ... ... ...."),
    country("Greenland", "GL", "299", "+... .. .. .."),
    country("Grenada", "GD", "1473", "+. (...) ...-...."),
    country("Guadeloupe", "GP", "590", "+... ... .. .. .."),
    country("Guam", "GU", "1671", "+. (...) ...-...."),
    country("Guatemala", "GT", "502", "+... ....-...."),
    ranked("Guernsey", "GG", "44", 1, "+.. .... ......"),
    country("Guinea", "GN", "224", "+... ... ... ..."),
    country("Guinea-Bissau", "GW", "245", "+... ... ...."),
    country("Guyana", "GY", "592", "+... ... ...."),
    country("Haiti", "HT", "509", "+... .... ...."),
    country("Honduras", "HN", "504", "+... ....-...."),
    country("Hong Kong", "HK", "852", "+... .... ...."),
    country("Hungary", "HU", "36", "+.. . ... ...."),
    country("Iceland", "IS", "354", "+... ... ...."),
    country("India", "IN", "91", "+.. ..... ....."),
    country("Indonesia", "ID", "62", "+.. ...-...-..."),
    country("Iran", "IR", "98", "+.. ... ... ...."),
    country("Iraq", "IQ", "964", "+... ... ... ...."),
    country("Ireland", "IE", "353", "+... .. ... ...."),
    ranked("Isle of Man", "IM", "44", 2, "+.. .... ......"),
    country("Israel", "IL", "972", "+... .-...-....."),
    country("Italy", "IT", "39", "+.. ... ... ...."),
    country("Ivory Coast", "CI", "225", "+... .. .. .. .."),
    country("Jamaica", "JM", "1876", "+. (...) ...-...."),
    country("Japan", "JP", "81", "+.. .. .... ...."),
    ranked("Jersey", "JE", "44", 3, "+.. .... ......"),
    country("Jordan", "JO", "962", "+... . .... ...."),
    ranked("Kazakhstan", "KZ", "7", 1, "+. ... ... .. .."),
    country("Kenya", "KE", "254", "+... ... ......"),
    country("Kiribati", "KI", "686", "+... .. ..."),
    country("Kosovo", "XK", "383", "+... .. ... ..."),
    country("Kuwait", "KW", "965", "+... .... ...."),
    country("Kyrgyzstan", "KG", "996", "+... ... ... ..."),
    country("Laos", "LA", "856", "+... .. .. ... ..."),
    country("Latvia", "LV", "371", "+... .. ... ..."),
    country("Lebanon", "LB", "961", "+... .. ... ..."),
    country("Lesotho", "LS", "266", "+... .... ...."),
    country("Liberia", "LR", "231", "+... ... ... ..."),
    country("Libya", "LY", "218", "+... .. ... ...."),
    country("Liechtenstein", "LI", "423", "+... ... ...."),
    country("Lithuania", "LT", "370", "+... ... ....."),
    country("Luxembourg", "LU", "352", "+... ... ... ..."),
    country("Macau", "MO", "853", "+... .... ...."),
    country("Madagascar", "MG", "261", "+... .. .. ... .."),
    country("Malawi", "MW", "265", "+... ... ... ..."),
    country("Malaysia", "MY", "60", "+.. ..-.... ...."),
    country("Maldives", "MV", "960", "+... ... ...."),
    country("Mali", "ML", "223", "+... .. .. .. .."),
    country("Malta", "MT", "356", "+... .... ...."),
    country("Marshall Islands", "MH", "692", "+... ... ...."),
    country("Martinique", "MQ", "596", "+... ... .. .. .."),
    country("Mauritania", "MR", "222", "+... .. .. .. .."),
    country("Mauritius", "MU", "230", "+... .... ...."),
    ranked("Mayotte", "YT", "262", 1, "+... ... .. .. .."),
    country("Mexico", "MX", "52", "+.. ... ... ...."),
    country("Micronesia", "FM", "691", "+... ... ...."),
    country("Moldova", "MD", "373", "+... .... ...."),
    country("Monaco", "MC", "377", "+... .. ... ..."),
    country("Mongolia", "MN", "976", "+... .... ...."),
    country("Montenegro", "ME", "382", "+... .. ... ..."),
    country("Montserrat", "MS", "1664", "+. (...) ...-...."),
    country("Morocco", "MA", "212", "+... .-.. .. .. .."),
    country("Mozambique", "MZ", "258", "+... .. ... ...."),
    country("Myanmar", "MM", "95", "+.. ... ... ..."),
    country("Namibia", "NA", "264", "+... .. ... ...."),
    country("Nauru", "NR", "674", "+... ... ...."),
    country("Nepal", "NP", "977", "+... .. .... ...."),
    country("Netherlands", "NL", "31", "+.. . ........"),
    country("New Caledonia", "NC", "687", "+... .. .. .."),
    country("New Zealand", "NZ", "64", "+.. .. ... ...."),
    country("Nicaragua", "NI", "505", "+... .... ...."),
    country("Niger", "NE", "227", "+... .. .. .. .."),
    country("Nigeria", "NG", "234", "+... ... ... ...."),
    country("Niue", "NU", "683", "+... ...."),
    country("Norfolk Island", "NF", "672", "+... .. ...."),
    country("North Korea", "KP", "850", "+... ... ... ...."),
    country("North Macedonia", "MK", "389", "+... .. ... ..."),
    country("Northern Mariana Islands", "MP", "1670", "+. (...) ...-...."),
    country("Norway", "NO", "47", "+.. ... .. ..."),
    country("Oman", "OM", "968", "+... .... ...."),
    country("Pakistan", "PK", "92", "+.. ... ......."),
    country("Palau", "PW", "680", "+... ... ...."),
    country("Palestine", "PS", "970", "+... ... ... ..."),
    country("Panama", "PA", "507", "+... ....-...."),
    country("Papua New Guinea", "PG", "675", "+... ... ...."),
    country("Paraguay", "PY", "595", "+... ... ......"),
    country("Peru", "PE", "51", "+.. ... ... ..."),
    country("Philippines", "PH", "63", "+.. ... ... ...."),
    country("Poland", "PL", "48", "+.. ... ... ..."),
    country("Portugal", "PT", "351", "+... ... ... ..."),
    with_area_codes("Puerto Rico", "PR", "1", 3, "+. (...) ...-....", PR_AREA_CODES),
    country("Qatar", "QA", "974", "+... .... ...."),
    country("Réunion", "RE", "262", "+... ... .. .. .."),
    country("Romania", "RO", "40", "+.. ... ... ..."),
    country("Russia", "RU", "7", "+. ... ... .. .."),
    country("Rwanda", "RW", "250", "+... ... ... ..."),
    ranked("Saint Barthélemy", "BL", "590", 1, "+... ... .. .. .."),
    country("Saint Helena", "SH", "290", "+... ...."),
    country("Saint Kitts and Nevis", "KN", "1869", "+. (...) ...-...."),
    country("Saint Lucia", "LC", "1758", "+. (...) ...-...."),
    ranked("Saint Martin", "MF", "590", 2, "+... ... .. .. .."),
    country("Saint Pierre and Miquelon", "PM", "508", "+... .. .. .."),
    country("Saint Vincent and the Grenadines", "VC", "1784", "+. (...) ...-...."),
    country("Samoa", "WS", "685", "+... .. ...."),
    country("San Marino", "SM", "378", "+... .... ......"),
    country("São Tomé and Príncipe", "ST", "239", "+... ... ...."),
    country("Saudi Arabia", "SA", "966", "+... .. ... ...."),
    country("Senegal", "SN", "221", "+... .. ... .. .."),
    country("Serbia", "RS", "381", "+... .. ... ...."),
    country("Seychelles", "SC", "248", "+... . ... ..."),
    country("Sierra Leone", "SL", "232", "+... .. ......"),
    country("Singapore", "SG", "65", "+.. .... ...."),
    country("Sint Maarten", "SX", "1721", "+. (...) ...-...."),
    country("Slovakia", "SK", "421", "+... ... ... ..."),
    country("Slovenia", "SI", "386", "+... .. ... ..."),
    country("Solomon Islands", "SB", "677", "+... ....."),
    country("Somalia", "SO", "252", "+... .. ... ..."),
    country("South Africa", "ZA", "27", "+.. .. ... ...."),
    country("South Korea", "KR", "82", "+.. .. .... ...."),
    country("South Sudan", "SS", "211", "+... ... ... ..."),
    country("Spain", "ES", "34", "+.. ... ... ..."),
    country("Sri Lanka", "LK", "94", "+.. .. ... ...."),
    country("Sudan", "SD", "249", "+... .. ... ...."),
    country("Suriname", "SR", "597", "+... ... ..."),
    ranked("Svalbard and Jan Mayen", "SJ", "47", 1, "+.. ... .. ..."),
    country("Sweden", "SE", "46", "+.. .. ... .. .."),
    country("Switzerland", "CH", "41", "+.. .. ... .. .."),
    country("Syria", "SY", "963", "+... ... ... ..."),
    country("Taiwan", "TW", "886", "+... .... ...."),
    country("Tajikistan", "TJ", "992", "+... .. ... ...."),
    country("Tanzania", "TZ", "255", "+... .. ... ...."),
    country("Thailand", "TH", "66", "+.. .. ... ...."),
    country("Timor-Leste", "TL", "670", "+... ... ...."),
    country("Togo", "TG", "228", "+... .. .. .. .."),
    country("Tokelau", "TK", "690", "+... ...."),
    country("Tonga", "TO", "676", "+... ....."),
    country("Trinidad and Tobago", "TT", "1868", "+. (...) ...-...."),
    country("Tunisia", "TN", "216", "+... .. ... ..."),
    country("Turkey", "TR", "90", "+.. ... ... .. .."),
    country("Turkmenistan", "TM", "993", "+... .. ......"),
    country("Turks and Caicos Islands", "TC", "1649", "+. (...) ...-...."),
    country("Tuvalu", "TV", "688", "+... ....."),
    country("Uganda", "UG", "256", "+... ... ......"),
    country("Ukraine", "UA", "380", "+... .. ... .. .."),
    country("United Arab Emirates", "AE", "971", "+... .. ... ...."),
    country("United Kingdom", "GB", "44", "+.. .... ......"),
    with_area_codes("United States", "US", "1", 0, "+. (...) ...-....", US_AREA_CODES),
    country("Uruguay", "UY", "598", "+... .... ...."),
    country("US Virgin Islands", "VI", "1340", "+. (...) ...-...."),
    country("Uzbekistan", "UZ", "998", "+... .. ... .. .."),
    country("Vanuatu", "VU", "678", "+... ....."),
    ranked("Vatican City", "VA", "39", 1, "+.. .. .... ...."),
    country("Venezuela", "VE", "58", "+.. ...-......."),
    country("Vietnam", "VN", "84", "+.. .. .... ..."),
    country("Wallis and Futuna", "WF", "681", "+... .. .. .."),
    ranked("Western Sahara", "EH", "212", 1, "+... .. ... ...."),
    country("Yemen", "YE", "967", "+... ... ... ..."),
    country("Zambia", "ZM", "260", "+... .. ... ...."),
    country("Zimbabwe", "ZW", "263", "+... .. ... ...."),
];
