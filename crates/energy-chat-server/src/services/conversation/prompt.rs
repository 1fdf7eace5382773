/// Fixed opening prompt for a new conversation: a static weather
/// description, the household appliance configuration, and the full
/// energy-saving tip catalog embedded as JSON for the model to pick from.
pub const OPENING_PROMPT: &str = r#"Today is clear sky. Temperature is 295.86 K.I have gas boiler as space heating type and gas boiler as water heating type. Can you give me some tips for optimal energy usage? There is json data that you should use. Give me most accurate tip from provided data. If some tip don't fit don't show it. Start sentence with: Here is tip for you: At the end add reason why this tip was provided. Data: ```{
                "generic-tips-thermostat": {
                    "title": "Small steps, big difference",
                    "content": "Raise or lower your thermostat by just one degree to save up to 10% of your running costs."
                },
                "generic-tips-winter-sunshine": {
                    "title": "Warm up for free",
                    "content": "Let the sunshine through the north, east and west-facing windows during the day. Close curtains and blinds at night to keep this heat in."
                },
                "generic-tips-summer-blinds": {
                    "title": "Keep the heat out",
                    "content": "Close curtains and shade windows during warm days to prevent the sun from heating the home."
                },
                "generic-tips-standby-devices": {
                    "title": "Try a one switch solution",
                    "content": "Too time-consuming to switch off every appliance? Use a power board in a common place to shut off multiple appliances at the same time."
                },
                "generic-tips-sunny-charging": {
                    "title": "Make the most of your solar",
                    "content": "If you have extra devices to charge, plug them in during the day when your solar is producing the most."
                },
                "generic-tips-temp-swings": {
                    "title": "Take a step outside",
                    "content": "Watch for outdoor temperature swings throughout the week and adjust your thermostat accordingly."
                },
                "generic-tips-dishwasher-wait": {
                    "title": "Clean dishes with the sun",
                    "content": "Don't need your dishes again until tomorrow? Schedule your dishwasher to run during the day to make the most of your solar."
                },
                "generic-tips-reheating-food": {
                    "title": "Hot food, less energy",
                    "content": "You can save energy by using a toaster or an air fryer to reheat food instead of your oven."
                },
                "generic-tips-shower-length": {
                    "title": "Make it a challenge",
                    "content": "Take a quick shower to save water heating. Losing track of time? Pick a favourite song and challenge yourself to shut off the water before it ends."
                },
                "generic-tips-defrost-naturally": {
                    "title": "Plan ahead to save more",
                    "content": "Plan ahead to let frozen things thaw naturally instead of using a microwave. Chuck a note on the fridge as a reminder for tomorrow's dinner."
                },
                "generic-tips-clean-lights": {
                    "title": "Keep it clean",
                    "content": "Keep lights and fittings clean. Dust on globes, shades and sensors reduces energy efficiency."
                },
                "generic-tips-microwave-clock": {
                    "title": "Make time to turn it off",
                    "content": "Unplug your microwave when you’re not using it. Over a year, it can consume more energy running the clock than cooking your food!"
                },
                "generic-tips-batch-ironing": {
                    "title": "Just heat once",
                    "content": "Iron or steam your clothes in large batches to reduce heating up appliances every time."
                },
                "generic-tips-motion-detector": {
                    "title": "Light only when you need it",
                    "content": "Don’t leave the security lights on all night or day. Have a motion detector fitted."
                },
                "personalised-tips-t10": {
                    "title": "Don't leave your appliances hanging",
                    "content": "Many appliances keep using energy when you're not using them (up to 30% of your home's energy!). Switch them off right after use to make a difference."
                },
                "personalised-tips-t20": {
                    "title": "Everyone needs time off",
                    "content": "Give your appliances a break. Unplug your appliances before you leave for a holiday."
                },
                "personalised-tips-t50": {
                    "title": "How hot is your water?",
                    "content": "Washing your dishes with cooler water can be just as effective. Try lowering the temperature settings on your dishwasher."
                },
                "personalised-tips-t60": {
                    "title": "Wait it out and load it up",
                    "content": "Being patient can save you. Wait until the machine is fully loaded before you start your dishwasher."
                },
                "personalised-tips-t90": {
                    "title": "Keep the warmth inside",
                    "content": "Use your oven lights to check if your food is ready instead of opening the door."
                },
                "personalised-tips-t110": {
                    "title": "Choose the right size",
                    "content": "Choose the right size cooking ring and use a lid to keep the heat inside your pan."
                },
                "personalised-tips-t130": {
                    "title": "Make the most of your pans",
                    "content": "Try a steamer or segmented pan for cooking your vegetables instead of using multiple rings."
                },
                "personalised-tips-t140": {
                    "title": "Pick the right ring",
                    "content": "Choose the right size ring on your stovetop to make sure you only heat the bottom of the pan."
                },
                "personalised-tips-t150": {
                    "title": "Do you really need that heat?",
                    "content": "Switch your oven off sooner - many things will keep cooking while the oven cools down."
                },
                "personalised-tips-t160": {
                    "title": "How much water do you need?",
                    "content": "When boiling vegetables, use just enough water to cover your vegetables."
                },
                "personalised-tips-t170": {
                    "title": "Make the most of your toast",
                    "content": "When making toast, using a toaster is much more efficient than using a grill."
                },
                "personalised-tips-t200": {
                    "title": "Wait it out and load it up",
                    "content": "Half loaded washing machine use costs you almost as much as a fully loaded use. Try to wait until you can fill the machine completely."
                },
                "personalised-tips-t210": {
                    "title": "Your clothes and bills like the cold",
                    "content": "Most energy for laundry is used to warm up water. Use a low temperature or eco setting that is fine tuned to work effectively."
                },
                "personalised-tips-t230": {
                    "title": "Make the most of your sunny day",
                    "content": "Check the weather forecast. Plan to run your washing machine on solar and dry your clothes outside."
                },
                "personalised-tips-t250": {
                    "title": "How dry is too dry?",
                    "content": "Only dry for as long as you need. Avoid overdrying your laundry by using automatic and timed settings on your dryer."
                },
                "personalised-tips-t270": {
                    "title": "Dirty filters use more energy",
                    "content": "A dirty filter blocks the airflow and makes your dryer work harder. Clean the filter regularly."
                },
                "personalised-tips-t280": {
                    "title": "Have a ball with your dryer",
                    "content": "Reduce your clothes drying time. Use eco balls in your dryer so warm air moves around better."
                },
                "personalised-tips-t330": {
                    "title": "Shed light on your light habits",
                    "content": "Try using lamps instead of overhead lights. Switch off the lights when you leave the room."
                },
                "personalised-tips-t340": {
                    "title": "Shed light on your lights",
                    "content": "Change to energy efficient globes. LEDs or CFLs last longer and can use up to 90% less energy compared to standard incandescent globes."
                },
                "personalised-tips-t360": {
                    "title": "Keep the cold inside",
                    "content": "Make sure to load and unload your fridge and freezer as quickly as you can."
                },
                "personalised-tips-t380": {
                    "title": "Don't heat up your fridge",
                    "content": "Let warm food cool down first before putting it directly into your fridge."
                },
                "personalised-tips-t390": {
                    "title": "Keep the cold inside",
                    "content": "Keep the cold inside. Make sure your fridge and freezer seals are air-tight."
                },
                "personalised-tips-t400": {
                    "title": "Unfreeze energy savings",
                    "content": "Opening the freezer causes frost to build up. Regularly defrost your freezer to avoid build up of ice."
                },
                "personalised-tips-t420": {
                    "title": "Is your food cold enough?",
                    "content": "Check and adjust the temperature setting of your fridge and freezer."
                },
                "personalised-tips-t470": {
                    "title": "Only heat what you need",
                    "content": "Not using this room? Avoid wasting warmth by turning off heating appliances in rooms you don't use for awhile."
                },
                "personalised-tips-t480": {
                    "title": "Give heat a break",
                    "content": "Ready for your holiday? Add turning your space heating down to your pre-trip checklist."
                },
                "personalised-tips-t490": {
                    "title": "Seal up energy savings",
                    "content": "Inspect your windows and doors to make sure there are no leaks. Door seals, draught-proofing strips and door snakes can stop air from escaping."
                },
                "personalised-tips-t510": {
                    "title": "Give your appliances room to breathe",
                    "content": "Give your heating appliances fresh air. Don't block them with curtains or furniture."
                },
                "personalised-tips-t530": {
                    "title": "Close up for the night",
                    "content": "Close your curtains at night can preserve heat when it's cold outside."
                },
                "personalised-tips-t700": {
                    "title": "How much heat do you need?",
                    "content": "Lower the temperature of your warm water boiler for just-as-clean dishes and showers."
                }
            }```"#;
